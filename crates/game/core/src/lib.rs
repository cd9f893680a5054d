//! Deterministic combat rules for a two-fighter arena match.
//!
//! `fight-core` defines the canonical rules (fighter state, attack resolution,
//! opponent policy, round/match progression) and exposes pure APIs that are
//! reused by the runtime and by offline tools. All randomness flows through an
//! injected [`RngSource`], so a seeded match replays identically.
//!
//! The crate never touches a display surface. [`MatchController::tick`]
//! consumes a normalized [`InputSignal`] and returns [`MatchEvent`]s; callers
//! render from [`MatchSnapshot`].
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod input;
pub mod state;

pub use ai::{OpponentPolicy, PolicyAction};
pub use combat::{
    AttackDescriptor, AttackKind, BasicAttack, Hit, RoundWinner, calculate_damage,
    check_collision, is_round_over, perform_attack, perform_special_move, round_winner,
};
pub use config::{AttackTuning, CombatConfig, MatchConfig};
pub use engine::{
    EventCategory, FighterView, MatchController, MatchEvent, MatchResult, MatchSnapshot,
    MatchWinner,
};
pub use env::{PcgRng, RngSource, ScriptedRng};
pub use error::{ConfigError, ErrorSeverity, FighterError, GameError, MatchError};
pub use input::InputSignal;
pub use state::{
    Direction, Fighter, FighterProfile, MatchPhase, MatchState, Millis, Side, Stage, Tick,
};
