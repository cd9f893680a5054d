//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Everything the `arena` binary needs to set up a match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    /// Player 1's fighter. Random when unset.
    pub fighter: Option<String>,
    /// CPU fighter. Random (never the player's fighter) when unset.
    pub opponent: Option<String>,
    /// Stage name. Random when unset.
    pub stage: Option<String>,
    pub seed: Option<u64>,
    /// Overrides the opponent difficulty from the settings file.
    pub difficulty: Option<f64>,
    /// Directory holding `fighters.ron`, `stages.ron` and `settings.toml`.
    pub data_dir: Option<PathBuf>,
    /// Explicit settings file; takes precedence over `data_dir/settings.toml`.
    pub settings: Option<PathBuf>,
    /// Pace ticks at the configured tick rate instead of running flat out.
    pub realtime: bool,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_FIGHTER` - Player 1 fighter name (default: random)
    /// - `ARENA_OPPONENT` - CPU fighter name (default: random)
    /// - `ARENA_STAGE` - Stage name (default: random)
    /// - `ARENA_SEED` - Match RNG seed (default: entropy)
    /// - `ARENA_DIFFICULTY` - Opponent difficulty in (0, 1]
    /// - `ARENA_DATA_DIR` - Content directory (default: built-in roster)
    /// - `ARENA_SETTINGS` - Settings TOML file
    /// - `ARENA_REALTIME` - Run at wall-clock speed (default: false)
    /// - `ARENA_LOG_DIR` - Also write logs to a file in this directory (`default` for the platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parsed = |key: &str| text(key).and_then(|value| value.trim().parse().ok());

        Self {
            fighter: text("ARENA_FIGHTER"),
            opponent: text("ARENA_OPPONENT"),
            stage: text("ARENA_STAGE"),
            seed: parsed("ARENA_SEED"),
            difficulty: text("ARENA_DIFFICULTY").and_then(|value| value.trim().parse().ok()),
            data_dir: text("ARENA_DATA_DIR").map(PathBuf::from),
            settings: text("ARENA_SETTINGS").map(PathBuf::from),
            realtime: text("ARENA_REALTIME")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            log_dir: text("ARENA_LOG_DIR").map(PathBuf::from),
        }
    }
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`; anything else is off.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ClientConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("ARENA_FIGHTER", "Watson"),
            ("ARENA_OPPONENT", "GLaDOS"),
            ("ARENA_STAGE", "data center"),
            ("ARENA_SEED", "42"),
            ("ARENA_DIFFICULTY", "0.9"),
            ("ARENA_SETTINGS", "/etc/arena/settings.toml"),
            ("ARENA_REALTIME", "yes"),
        ]);

        assert_eq!(config.fighter.as_deref(), Some("Watson"));
        assert_eq!(config.opponent.as_deref(), Some("GLaDOS"));
        assert_eq!(config.stage.as_deref(), Some("data center"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.difficulty, Some(0.9));
        assert_eq!(
            config.settings,
            Some(PathBuf::from("/etc/arena/settings.toml"))
        );
        assert!(config.realtime);
    }

    #[test]
    fn malformed_numbers_and_blanks_are_ignored() {
        let config = config_from(&[
            ("ARENA_SEED", "not-a-number"),
            ("ARENA_FIGHTER", "  "),
            ("ARENA_REALTIME", "maybe"),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.fighter, None);
        assert!(!config.realtime);
    }
}
