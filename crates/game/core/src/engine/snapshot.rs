//! Read-only views handed to presentation layers.

use crate::state::{Direction, Fighter, MatchPhase, Tick};

/// Final outcome of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchWinner {
    Player1,
    Player2,
    /// Equal win counters. Not reachable while rounds continue until one
    /// side has enough wins.
    Draw,
}

impl MatchWinner {
    /// The side with strictly more round wins.
    pub fn from_wins(player1_wins: u32, player2_wins: u32) -> Self {
        use core::cmp::Ordering;
        match player1_wins.cmp(&player2_wins) {
            Ordering::Greater => MatchWinner::Player1,
            Ordering::Less => MatchWinner::Player2,
            Ordering::Equal => MatchWinner::Draw,
        }
    }
}

/// What a renderer needs to draw one fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterView {
    pub name: String,
    pub color: String,
    pub health: u32,
    pub energy: u32,
    pub position: f64,
    pub direction: Direction,
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub is_jumping: bool,
    pub combo_counter: u32,
}

impl From<&Fighter> for FighterView {
    fn from(fighter: &Fighter) -> Self {
        Self {
            name: fighter.name().to_owned(),
            color: fighter.color().to_owned(),
            health: fighter.health,
            energy: fighter.energy,
            position: fighter.position,
            direction: fighter.direction,
            is_attacking: fighter.is_attacking(),
            is_blocking: fighter.is_blocking(),
            is_jumping: fighter.is_jumping(),
            combo_counter: fighter.combo_counter,
        }
    }
}

/// Presentation snapshot of the whole match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub tick: Tick,
    pub phase: MatchPhase,
    pub paused: bool,
    pub round: u32,
    pub fight_timer: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    /// `[player1, player2]`.
    pub fighters: [FighterView; 2],
}

/// Returned once the match reaches [`MatchPhase::MatchEnd`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: MatchWinner,
    pub winner_name: Option<String>,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub rounds_played: u32,
}
