//! Turns match events into one-line commentary for the terminal.
use fight_core::{MatchEvent, MatchResult, MatchWinner, RoundWinner, Side};

/// Renders events using the fighters' names.
pub struct Commentary {
    names: [String; 2],
}

impl Commentary {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            names: [player1.into(), player2.into()],
        }
    }

    fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Commentary for `event`, or `None` for events too small to mention.
    pub fn describe(&self, event: &MatchEvent) -> Option<String> {
        let line = match event {
            MatchEvent::VersusAnnounced { player1, player2 } => {
                format!("{player1}  VS  {player2}")
            }
            MatchEvent::RoundAnnounced { round } => format!("ROUND {round}"),
            MatchEvent::FightStarted { .. } => "FIGHT!".to_owned(),
            MatchEvent::TimerTicked { seconds } if *seconds % 10 == 0 || *seconds <= 5 => {
                format!("  [{seconds:>2}s]")
            }
            MatchEvent::TimerTicked { .. } | MatchEvent::AttackStarted { .. } => return None,
            MatchEvent::SpecialMoveUsed { side, name, .. } => {
                format!("  {} unleashes {name}!", self.name(*side))
            }
            MatchEvent::Jumped { side } => format!("  {} jumps", self.name(*side)),
            MatchEvent::HitLanded {
                target,
                attacker,
                damage,
                ..
            } => format!(
                "  {} hits {} for {damage}",
                self.name(*attacker),
                self.name(*target)
            ),
            MatchEvent::ComboTriggered { side, count, .. } => {
                format!("  {} x{count} COMBO!", self.name(*side))
            }
            MatchEvent::StageHazardTriggered {
                description,
                damage,
            } => {
                let hurt: Vec<String> = damage
                    .iter()
                    .zip(&self.names)
                    .filter_map(|(amount, name)| amount.map(|amount| format!("{name} -{amount}")))
                    .collect();
                if hurt.is_empty() {
                    format!("  {description} (both fighters dodge)")
                } else {
                    format!("  {description} ({})", hurt.join(", "))
                }
            }
            MatchEvent::RoundWon {
                round,
                winner,
                winner_name,
                player1,
                player2,
                player1_wins,
                player2_wins,
            } => match (winner, winner_name) {
                (RoundWinner::Draw, _) | (_, None) => format!(
                    "Round {round} is a DRAW: {player1} vs {player2} ({player1_wins}-{player2_wins})"
                ),
                (_, Some(name)) => {
                    format!("{name} wins round {round}! ({player1_wins}-{player2_wins})")
                }
            },
            MatchEvent::MatchEnded {
                winner_name: Some(name),
                ..
            } => format!("{name} WINS THE MATCH!"),
            MatchEvent::MatchEnded { .. } => "The match ends in a draw".to_owned(),
            MatchEvent::Paused => "-- paused --".to_owned(),
            MatchEvent::Resumed => "-- resumed --".to_owned(),
        };
        Some(line)
    }
}

/// Closing summary printed after the match.
pub fn final_report(result: &MatchResult, seed: u64) -> String {
    let headline = match (&result.winner, &result.winner_name) {
        (MatchWinner::Draw, _) | (_, None) => "Draw".to_owned(),
        (_, Some(name)) => format!("Winner: {name}"),
    };
    format!(
        "{headline} | rounds {} | score {}-{} | seed {seed}",
        result.rounds_played, result.player1_wins, result.player2_wins
    )
}
