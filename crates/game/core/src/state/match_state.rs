//! Round and match bookkeeping.

use crate::combat::RoundWinner;

/// Phases of a match, in the order they are normally visited.
///
/// ```text
/// Select → VersusAnnounce → RoundAnnounce → RoundActive → RoundEnd ─┬→ RoundAnnounce
///                                                                   └→ MatchEnd
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    Select,
    VersusAnnounce,
    RoundAnnounce,
    RoundActive,
    RoundEnd,
    MatchEnd,
}

impl MatchPhase {
    /// Phases in which the simulation clock advances.
    pub const fn is_running(self) -> bool {
        !matches!(self, MatchPhase::Select | MatchPhase::MatchEnd)
    }
}

/// Round counters, win tallies and the fight timer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub phase: MatchPhase,
    /// 1-based.
    pub current_round: u32,
    pub max_rounds: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    /// Seconds left in the current round.
    pub fight_timer: u32,
    pub round_active: bool,
    pub paused: bool,
}

impl MatchState {
    pub fn new(max_rounds: u32, round_seconds: u32) -> Self {
        Self {
            phase: MatchPhase::Select,
            current_round: 1,
            max_rounds,
            player1_wins: 0,
            player2_wins: 0,
            fight_timer: round_seconds,
            round_active: false,
            paused: false,
        }
    }

    /// `ceil(max_rounds / 2)`.
    pub fn wins_needed(&self) -> u32 {
        self.max_rounds.div_ceil(2)
    }

    /// Credits a round result. Draws credit neither side.
    pub fn record(&mut self, winner: RoundWinner) {
        match winner {
            RoundWinner::Player1 => self.player1_wins += 1,
            RoundWinner::Player2 => self.player2_wins += 1,
            RoundWinner::Draw => {}
        }
    }

    /// True once either side has enough round wins to take the match.
    pub fn is_decided(&self) -> bool {
        let needed = self.wins_needed();
        self.player1_wins >= needed || self.player2_wins >= needed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_decided_at_two_wins() {
        let mut state = MatchState::new(3, 99);
        state.record(RoundWinner::Player1);
        state.record(RoundWinner::Draw);
        assert!(!state.is_decided());
        state.record(RoundWinner::Player1);
        assert!(state.is_decided());
        assert_eq!(state.player2_wins, 0);
    }

    #[test]
    fn best_of_five_needs_three_wins() {
        let mut state = MatchState::new(5, 99);
        assert_eq!(state.wins_needed(), 3);
        state.record(RoundWinner::Player2);
        state.record(RoundWinner::Player2);
        assert!(!state.is_decided());
        state.record(RoundWinner::Player2);
        assert!(state.is_decided());
    }
}
