//! Combat resolution.
//!
//! Functions over two [`Fighter`](crate::state::Fighter)s: attack initiation,
//! collision detection, damage computation and round-outcome determination.
//!
//! # Architecture
//!
//! - **Explicit inputs**: time (`now`), tuning ([`CombatConfig`](crate::CombatConfig))
//!   and randomness ([`RngSource`](crate::RngSource)) are passed in, never read ambiently
//! - **Silent rejection**: requests that the rules refuse return `None` and leave
//!   the fighter untouched
//! - **Detection vs. application**: [`check_collision`] computes a hit but does not
//!   apply it; the caller decides when to call `take_damage`
//!
//! # Core Functions
//!
//! - `perform_attack` / `perform_special_move`: enter the attacking state
//! - `check_collision`: at most one hit per call, first side wins
//! - `calculate_damage`: attributes, combo multiplier, ±1 jitter, floor of 1
//! - `is_round_over` / `round_winner`: round outcome

pub mod attack;
pub mod collision;
pub mod damage;
pub mod result;

pub use attack::{AttackDescriptor, AttackKind, BasicAttack, perform_attack, perform_special_move};
pub use collision::{Hit, check_collision};
pub use damage::calculate_damage;
pub use result::{RoundWinner, is_round_over, round_winner};
