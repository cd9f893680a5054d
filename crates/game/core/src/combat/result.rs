//! Round outcome.

use crate::state::Fighter;

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundWinner {
    Player1,
    Player2,
    Draw,
}

/// A round is over when either fighter is knocked out or the timer has run out.
pub fn is_round_over(a: &Fighter, b: &Fighter, fight_timer: u32) -> bool {
    a.is_knocked_out() || b.is_knocked_out() || fight_timer == 0
}

/// Decides the round between `a` (player 1) and `b` (player 2).
///
/// A knocked-out fighter loses (player 1 is checked first). Otherwise the
/// higher remaining health wins and equal health is a draw.
pub fn round_winner(a: &Fighter, b: &Fighter) -> RoundWinner {
    if a.is_knocked_out() {
        RoundWinner::Player2
    } else if b.is_knocked_out() {
        RoundWinner::Player1
    } else if a.health > b.health {
        RoundWinner::Player1
    } else if b.health > a.health {
        RoundWinner::Player2
    } else {
        RoundWinner::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FighterProfile;

    fn fighter(health: u32) -> Fighter {
        let mut f = Fighter::new(&FighterProfile {
            name: "F".into(),
            power: 50,
            speed: 50,
            intelligence: 50,
            color: String::new(),
            moves: vec!["Move".into()],
            story: String::new(),
        })
        .unwrap();
        f.health = health;
        f
    }

    #[test]
    fn round_over_on_knockout_or_timeout() {
        assert!(!is_round_over(&fighter(10), &fighter(10), 5));
        assert!(is_round_over(&fighter(0), &fighter(10), 5));
        assert!(is_round_over(&fighter(10), &fighter(0), 5));
        assert!(is_round_over(&fighter(10), &fighter(10), 0));
    }

    #[test]
    fn winner_favors_survivor_then_health() {
        assert_eq!(round_winner(&fighter(0), &fighter(3)), RoundWinner::Player2);
        assert_eq!(round_winner(&fighter(3), &fighter(0)), RoundWinner::Player1);
        assert_eq!(round_winner(&fighter(60), &fighter(40)), RoundWinner::Player1);
        assert_eq!(round_winner(&fighter(40), &fighter(60)), RoundWinner::Player2);
    }

    #[test]
    fn equal_health_at_timeout_is_a_draw() {
        let a = fighter(55);
        let b = fighter(55);
        assert!(is_round_over(&a, &b, 0));
        assert_eq!(round_winner(&a, &b), RoundWinner::Draw);
    }
}
