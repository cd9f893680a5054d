//! Fighter roster loader.

use std::path::Path;

use fight_core::FighterProfile;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Shipped roster, `data/fighters.ron`.
pub(crate) const EMBEDDED_FIGHTERS: &str = include_str!("../../data/fighters.ron");

/// Fighter catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterCatalog {
    pub fighters: Vec<FighterProfile>,
}

/// Loader for the fighter roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate fighter profiles from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<FighterProfile>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate fighter profiles from RON text.
    ///
    /// An invalid profile fails the whole catalog.
    pub fn parse(content: &str) -> LoadResult<Vec<FighterProfile>> {
        let catalog: FighterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fighter catalog RON: {}", e))?;

        for profile in &catalog.fighters {
            profile
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid fighter profile: {}", e))?;
        }

        Ok(catalog.fighters)
    }

    /// The roster compiled into the crate.
    pub fn embedded() -> LoadResult<Vec<FighterProfile>> {
        Self::parse(EMBEDDED_FIGHTERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_roster_has_nine_valid_fighters() {
        let fighters = RosterLoader::embedded().unwrap();
        assert_eq!(fighters.len(), 9);

        let clippy = &fighters[0];
        assert_eq!(clippy.name, "CLIPPY");
        assert_eq!((clippy.power, clippy.speed, clippy.intelligence), (85, 70, 95));
        assert_eq!(clippy.color, "#0066cc");
        assert_eq!(clippy.moves.len(), 4);
        assert!(fighters.iter().all(|f| f.moves.len() == 4));
    }

    #[test]
    fn out_of_range_attribute_fails_the_catalog() {
        let text = r#"(fighters: [(name: "X", power: 120, speed: 1, intelligence: 1, moves: ["M"])])"#;
        let err = RosterLoader::parse(text).unwrap_err();
        assert!(err.to_string().contains("power"));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let text = r#"(fighters: [(name: "X", power: 1, speed: 1, intelligence: 1, moves: ["M"])])"#;
        let fighters = RosterLoader::parse(text).unwrap();
        assert!(fighters[0].color.is_empty());
        assert!(fighters[0].story.is_empty());
    }
}
