//! Fighter and stage selection.

use fight_core::{FighterError, FighterProfile, RngSource, Stage};

/// Everything a player can pick from before a match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    fighters: Vec<FighterProfile>,
    stages: Vec<Stage>,
}

impl Roster {
    /// Builds a roster, rejecting the first invalid fighter profile.
    pub fn new(fighters: Vec<FighterProfile>, stages: Vec<Stage>) -> Result<Self, FighterError> {
        for profile in &fighters {
            profile.validate()?;
        }
        Ok(Self { fighters, stages })
    }

    pub fn fighters(&self) -> &[FighterProfile] {
        &self.fighters
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Case-insensitive lookup by display name.
    pub fn fighter(&self, name: &str) -> Option<&FighterProfile> {
        self.fighters
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup by display name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages
            .iter()
            .find(|stage| stage.name.eq_ignore_ascii_case(name))
    }

    /// Picks a uniformly random CPU opponent other than `player`.
    ///
    /// Falls back to the player's own profile when nobody else is available
    /// (a mirror match), and returns `None` only for an empty roster.
    pub fn random_opponent(
        &self,
        player: &str,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Option<&FighterProfile> {
        let candidates: Vec<&FighterProfile> = self
            .fighters
            .iter()
            .filter(|profile| !profile.name.eq_ignore_ascii_case(player))
            .collect();

        match rng.index(candidates.len()) {
            Some(idx) => Some(candidates[idx]),
            None => self.fighter(player),
        }
    }

    pub fn random_fighter(&self, rng: &mut (impl RngSource + ?Sized)) -> Option<&FighterProfile> {
        rng.index(self.fighters.len()).map(|idx| &self.fighters[idx])
    }

    pub fn random_stage(&self, rng: &mut (impl RngSource + ?Sized)) -> Option<&Stage> {
        rng.index(self.stages.len()).map(|idx| &self.stages[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::ScriptedRng;

    fn profile(name: &str) -> FighterProfile {
        FighterProfile {
            name: name.into(),
            power: 50,
            speed: 50,
            intelligence: 50,
            color: String::new(),
            moves: vec!["Move".into()],
            story: String::new(),
        }
    }

    #[test]
    fn rejects_invalid_profiles() {
        let mut bad = profile("BROKEN");
        bad.moves.clear();
        assert!(matches!(
            Roster::new(vec![profile("OK"), bad], Vec::new()),
            Err(FighterError::NoSpecialMoves { .. })
        ));
    }

    #[test]
    fn lookup_ignores_case() {
        let roster = Roster::new(vec![profile("GLaDOS")], Vec::new()).unwrap();
        assert!(roster.fighter("glados").is_some());
        assert!(roster.fighter("HAL 9000").is_none());
    }

    #[test]
    fn random_opponent_never_picks_the_player() {
        let roster = Roster::new(
            vec![profile("A"), profile("B"), profile("C")],
            Vec::new(),
        )
        .unwrap();

        let mut rng = ScriptedRng::new([0.0, 0.5, 0.99]);
        for _ in 0..3 {
            let opponent = roster.random_opponent("B", &mut rng).unwrap();
            assert_ne!(opponent.name, "B");
        }
    }

    #[test]
    fn lone_fighter_gets_a_mirror_match() {
        let roster = Roster::new(vec![profile("SOLO")], Vec::new()).unwrap();
        let mut rng = ScriptedRng::new([0.4]);
        assert_eq!(
            roster.random_opponent("SOLO", &mut rng).map(|p| p.name.as_str()),
            Some("SOLO")
        );
        assert!(roster.random_stage(&mut rng).is_none());
    }
}
