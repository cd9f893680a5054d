//! Mutable state owned by the match: the two fighters and round bookkeeping.
mod common;
mod fighter;
mod match_state;
mod stage;

pub use common::{Direction, Millis, Side, Tick};
pub use fighter::{
    ActiveAttack, Fighter, FighterProfile, MAX_ATTRIBUTE, MAX_ENERGY, MAX_HEALTH,
};
pub use match_state::{MatchPhase, MatchState};
pub use stage::Stage;
