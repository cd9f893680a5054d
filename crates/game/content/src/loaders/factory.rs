//! Content factory for building a roster and settings from data files.

use std::path::{Path, PathBuf};

use fight_core::MatchConfig;

use crate::loaders::{LoadResult, RosterLoader, SettingsLoader, StageLoader};
use crate::roster::Roster;

/// Content factory that loads all match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── fighters.ron
/// ├── stages.ron
/// └── settings.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load fighters and stages into a [`Roster`].
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let fighters = RosterLoader::load(&self.data_dir.join("fighters.ron"))?;
        let stages = StageLoader::load(&self.data_dir.join("stages.ron"))?;
        Ok(Roster::new(fighters, stages)?)
    }

    /// Load match settings from `settings.toml`, or the defaults if the file is absent.
    pub fn load_settings(&self) -> LoadResult<MatchConfig> {
        let path = self.data_dir.join("settings.toml");
        if !path.exists() {
            return Ok(MatchConfig::default());
        }
        SettingsLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The roster shipped with the crate.
    pub fn builtin_roster() -> LoadResult<Roster> {
        let fighters = RosterLoader::embedded()?;
        let stages = StageLoader::embedded()?;
        Ok(Roster::new(fighters, stages)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn builtin_roster_resolves_names() {
        let roster = ContentFactory::builtin_roster().unwrap();
        assert_eq!(roster.fighters().len(), 9);
        assert!(roster.fighter("hal 9000").is_some());
        assert!(roster.stage("Space Station").is_some());
    }
}
