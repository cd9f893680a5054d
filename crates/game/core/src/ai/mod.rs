//! Scripted opponent.
mod opponent;

pub use opponent::{OpponentPolicy, PolicyAction};
