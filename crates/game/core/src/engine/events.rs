//! Notifications emitted by [`super::MatchController::tick`].

use crate::combat::{AttackKind, RoundWinner};
use crate::state::Side;

use super::snapshot::MatchWinner;

/// Coarse grouping used by consumers that route events by topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventCategory {
    /// Announcements, round and match results, pause state.
    Match,
    /// Attacks, hits, combos, jumps and hazards.
    Combat,
}

/// Discrete things that happened during a tick, in the order they happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    VersusAnnounced {
        player1: String,
        player2: String,
    },
    RoundAnnounced {
        round: u32,
    },
    /// The round became active ("FIGHT!").
    FightStarted {
        round: u32,
    },
    /// The fight timer dropped to `seconds`.
    TimerTicked {
        seconds: u32,
    },
    AttackStarted {
        side: Side,
        kind: AttackKind,
        duration_ms: u64,
        is_combo: bool,
    },
    SpecialMoveUsed {
        side: Side,
        name: String,
        color: String,
        position: f64,
    },
    Jumped {
        side: Side,
    },
    HitLanded {
        target: Side,
        attacker: Side,
        /// Damage after block reduction.
        damage: u32,
        /// Target position, for damage numbers.
        position: f64,
    },
    ComboTriggered {
        side: Side,
        count: u32,
        position: f64,
    },
    /// `damage` is indexed by [`Side::index`]; airborne fighters are spared.
    StageHazardTriggered {
        description: String,
        damage: [Option<u32>; 2],
    },
    RoundWon {
        round: u32,
        winner: RoundWinner,
        winner_name: Option<String>,
        player1: String,
        player2: String,
        player1_wins: u32,
        player2_wins: u32,
    },
    MatchEnded {
        winner: MatchWinner,
        winner_name: Option<String>,
    },
    Paused,
    Resumed,
}

impl MatchEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            MatchEvent::AttackStarted { .. }
            | MatchEvent::SpecialMoveUsed { .. }
            | MatchEvent::Jumped { .. }
            | MatchEvent::HitLanded { .. }
            | MatchEvent::ComboTriggered { .. }
            | MatchEvent::StageHazardTriggered { .. } => EventCategory::Combat,
            _ => EventCategory::Match,
        }
    }

    pub fn is_match_end(&self) -> bool {
        matches!(self, MatchEvent::MatchEnded { .. })
    }
}
