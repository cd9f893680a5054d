//! Stage catalog loader.

use std::path::Path;

use fight_core::Stage;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Shipped stages, `data/stages.ron`.
pub(crate) const EMBEDDED_STAGES: &str = include_str!("../../data/stages.ron");

/// Stage catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCatalog {
    pub stages: Vec<Stage>,
}

/// Loader for the stage catalog from RON files.
pub struct StageLoader;

impl StageLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Stage>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Stage>> {
        let catalog: StageCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stage catalog RON: {}", e))?;

        if let Some(stage) = catalog.stages.iter().find(|s| s.name.trim().is_empty()) {
            anyhow::bail!("Stage with empty name: {:?}", stage.description);
        }

        Ok(catalog.stages)
    }

    pub fn embedded() -> LoadResult<Vec<Stage>> {
        Self::parse(EMBEDDED_STAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_stages_all_have_hazards() {
        let stages = StageLoader::embedded().unwrap();
        assert_eq!(stages.len(), 6);
        assert!(stages.iter().all(|s| s.hazards.len() == 3));
        assert_eq!(stages[4].name, "DATA CENTER");
    }
}
