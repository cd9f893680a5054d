//! Data-driven content definitions and loaders.
//!
//! This crate houses the static match content and provides loaders for RON/TOML data files:
//! - Fighter roster (data-driven via RON)
//! - Stage catalog with hazard descriptions (data-driven via RON)
//! - Match settings (data-driven via TOML)
//!
//! The shipped data under `data/` is also embedded in the binary, so a match can
//! be set up without touching the filesystem.
//!
//! All loaders use fight-core types directly with serde for RON/TOML deserialization.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::Roster;

#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, FighterCatalog, RosterLoader, SettingsLoader, StageCatalog, StageLoader,
};
