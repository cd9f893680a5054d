//! Content loaders for reading match data from files.
//!
//! Every loader has a `load(path)` entry point for files on disk and a `parse`
//! counterpart for in-memory text, which is what the embedded defaults use.

pub mod factory;
pub mod roster;
pub mod settings;
pub mod stage;

pub use factory::ContentFactory;
pub use roster::{FighterCatalog, RosterLoader};
pub use settings::SettingsLoader;
pub use stage::{StageCatalog, StageLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
