//! Tracing setup for the `arena` binary.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// Logs go to stderr so stdout stays free for match commentary. When
/// `log_dir` is given, a copy is also written to `arena.log` inside it. The
/// returned guard must be held until exit to flush the file writer.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "arena.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/arena.log", log_dir.display());
    Ok(Some(guard))
}

/// Resolves `ARENA_LOG_DIR`. The value `default` selects [`default_log_dir`].
pub fn resolve_log_dir(requested: &Path) -> PathBuf {
    if requested.as_os_str() == "default" {
        default_log_dir()
    } else {
        requested.to_path_buf()
    }
}

/// Platform-specific default log directory.
///
/// - macOS: `~/Library/Caches/arena/logs`
/// - Linux: `~/.cache/arena/logs` (or `$XDG_CACHE_HOME/arena/logs`)
/// - Windows: `%LOCALAPPDATA%\arena\logs`
/// - Fallback: `/tmp/arena/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/arena"))
        .join("logs")
}
