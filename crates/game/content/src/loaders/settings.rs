//! Match settings loader.

use std::path::Path;

use fight_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match settings from TOML files.
///
/// Every key is optional; omitted keys keep the [`MatchConfig`] defaults.
/// The result is validated before it is returned.
pub struct SettingsLoader;

impl SettingsLoader {
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MatchConfig> {
        let config: MatchConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid match settings: {}", e))?;

        Ok(config)
    }
}
