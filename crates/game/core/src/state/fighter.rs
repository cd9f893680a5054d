//! Fighter state: identity attributes, resources and action flags.

use crate::combat::AttackKind;
use crate::error::FighterError;

use super::common::{Direction, Millis};

pub const MAX_HEALTH: u32 = 100;
pub const MAX_ENERGY: u32 = 100;
pub const MAX_ATTRIBUTE: u8 = 100;

/// Static roster entry a [`Fighter`] is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterProfile {
    pub name: String,
    pub power: u8,
    pub speed: u8,
    pub intelligence: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    /// Special move names, in display order.
    pub moves: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub story: String,
}

impl FighterProfile {
    /// Checks the profile before any fighter is built from it.
    pub fn validate(&self) -> Result<(), FighterError> {
        if self.name.trim().is_empty() {
            return Err(FighterError::EmptyName);
        }
        for (attribute, value) in [
            ("power", self.power),
            ("speed", self.speed),
            ("intelligence", self.intelligence),
        ] {
            if value > MAX_ATTRIBUTE {
                return Err(FighterError::AttributeOutOfRange {
                    name: self.name.clone(),
                    attribute,
                    value: u32::from(value),
                });
            }
        }
        if self.moves.is_empty() {
            return Err(FighterError::NoSpecialMoves {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Attack currently in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveAttack {
    pub kind: AttackKind,
    /// Simulation time at which the attacking flag clears.
    pub expires_at: Millis,
    /// Set once this attack has landed a hit.
    pub connected: bool,
}

/// A combatant's full mutable combat state.
///
/// Identity attributes are fixed at construction. Everything else is
/// reinitialized by [`Fighter::reset`] at the start of every round.
///
/// The attacking and jumping flags carry their own expiry timestamps instead
/// of relying on scheduled callbacks: [`Fighter::expire`] clears them once the
/// simulation clock passes the deadline, and [`Fighter::reset`] drops any
/// pending deadline so nothing from a previous round can leak into the next.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    name: String,
    power: u8,
    speed: u8,
    intelligence: u8,
    color: String,
    special_move_names: Vec<String>,

    pub health: u32,
    pub energy: u32,
    /// Fractional energy accumulated by the passive trickle, in tenths.
    energy_tenths: u32,
    pub position: f64,
    pub direction: Direction,
    pub combo_counter: u32,
    /// Time of the last attack initiation; `None` until the first attack of the round.
    pub last_move_time: Option<Millis>,

    is_blocking: bool,
    attack: Option<ActiveAttack>,
    jump_expires_at: Option<Millis>,
}

impl Fighter {
    /// Builds a fighter from roster data, failing fast on invalid input.
    pub fn new(profile: &FighterProfile) -> Result<Self, FighterError> {
        profile.validate()?;

        Ok(Self {
            name: profile.name.clone(),
            power: profile.power,
            speed: profile.speed,
            intelligence: profile.intelligence,
            color: profile.color.clone(),
            special_move_names: profile.moves.clone(),
            health: MAX_HEALTH,
            energy: 0,
            energy_tenths: 0,
            position: 0.0,
            direction: Direction::Right,
            combo_counter: 0,
            last_move_time: None,
            is_blocking: false,
            attack: None,
            jump_expires_at: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> u8 {
        self.power
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn intelligence(&self) -> u8 {
        self.intelligence
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn special_move_names(&self) -> &[String] {
        &self.special_move_names
    }

    /// Reinitializes round state while preserving identity.
    ///
    /// Pending attack and jump deadlines are discarded.
    pub fn reset(&mut self, start_position: f64, direction: Direction) {
        self.health = MAX_HEALTH;
        self.energy = 0;
        self.energy_tenths = 0;
        self.position = start_position;
        self.direction = direction;
        self.combo_counter = 0;
        self.last_move_time = None;
        self.is_blocking = false;
        self.attack = None;
        self.jump_expires_at = None;
    }

    /// Applies damage and returns the amount after block reduction.
    ///
    /// The returned value is the post-block amount before the health floor,
    /// so it can exceed the health actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let amount = if self.is_blocking { amount / 2 } else { amount };
        self.health = self.health.saturating_sub(amount);
        amount
    }

    pub fn add_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount).min(MAX_ENERGY);
    }

    /// Deducts `amount` only if enough energy is available.
    pub fn use_energy(&mut self, amount: u32) -> bool {
        if self.energy >= amount {
            self.energy -= amount;
            true
        } else {
            false
        }
    }

    /// Adds passive energy measured in tenths of a point.
    pub fn trickle_energy(&mut self, tenths: u32) {
        if self.energy >= MAX_ENERGY {
            self.energy_tenths = 0;
            return;
        }
        self.energy_tenths += tenths;
        let whole = self.energy_tenths / 10;
        self.energy_tenths %= 10;
        self.add_energy(whole);
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn is_blocking(&self) -> bool {
        self.is_blocking
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_expires_at.is_some()
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    pub fn active_attack(&self) -> Option<&ActiveAttack> {
        self.attack.as_ref()
    }

    /// Attacking and blocking both lock out movement and new attacks.
    pub fn can_act(&self) -> bool {
        !self.is_attacking() && !self.is_blocking
    }

    /// Sets or clears the blocking stance.
    ///
    /// Raising a block is refused while attacking; returns the resulting stance.
    pub fn set_blocking(&mut self, blocking: bool) -> bool {
        self.is_blocking = blocking && !self.is_attacking();
        self.is_blocking
    }

    /// Enters the attacking state until `now + duration_ms`.
    pub(crate) fn begin_attack(&mut self, kind: AttackKind, now: Millis, duration_ms: u64) {
        self.attack = Some(ActiveAttack {
            kind,
            expires_at: now + duration_ms,
            connected: false,
        });
    }

    /// Kind of the in-flight attack if it can still land a hit.
    pub fn threatening_attack(&self, single_connect: bool) -> Option<AttackKind> {
        self.attack
            .filter(|attack| !(single_connect && attack.connected))
            .map(|attack| attack.kind)
    }

    /// Records that the in-flight attack landed.
    pub fn mark_connected(&mut self) {
        if let Some(attack) = self.attack.as_mut() {
            attack.connected = true;
        }
    }

    /// Starts a jump lasting `duration_ms`. Returns false if already airborne.
    pub fn start_jump(&mut self, now: Millis, duration_ms: u64) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.jump_expires_at = Some(now + duration_ms);
        true
    }

    /// Clears attack and jump flags whose deadline has passed.
    pub fn expire(&mut self, now: Millis) {
        if self.attack.is_some_and(|attack| now >= attack.expires_at) {
            self.attack = None;
        }
        if self.jump_expires_at.is_some_and(|deadline| now >= deadline) {
            self.jump_expires_at = None;
        }
    }

    /// Moves by `delta` and clamps into `[min, max]`.
    pub fn shift(&mut self, delta: f64, min: f64, max: f64) {
        self.position = (self.position + delta).clamp(min, max);
    }

    /// Distance to another fighter along the arena axis.
    pub fn distance_to(&self, other: &Fighter) -> f64 {
        (self.position - other.position).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> FighterProfile {
        FighterProfile {
            name: "CLIPPY".into(),
            power: 85,
            speed: 70,
            intelligence: 95,
            color: "#0066cc".into(),
            moves: vec!["Paper Storm".into(), "Office Fury".into()],
            story: String::new(),
        }
    }

    #[test]
    fn construction_rejects_invalid_profiles() {
        let mut bad = profile();
        bad.power = 101;
        assert!(matches!(
            Fighter::new(&bad),
            Err(FighterError::AttributeOutOfRange {
                attribute: "power",
                ..
            })
        ));

        let mut bad = profile();
        bad.name = "  ".into();
        assert_eq!(Fighter::new(&bad), Err(FighterError::EmptyName));

        let mut bad = profile();
        bad.moves.clear();
        assert!(matches!(
            Fighter::new(&bad),
            Err(FighterError::NoSpecialMoves { .. })
        ));
    }

    #[test]
    fn blocking_halves_damage_with_floor() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.set_blocking(true);
        assert_eq!(fighter.take_damage(10), 5);
        assert_eq!(fighter.take_damage(7), 3);
        assert_eq!(fighter.health, 92);
    }

    #[test]
    fn damage_return_ignores_health_floor() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.health = 4;
        assert_eq!(fighter.take_damage(9), 9);
        assert_eq!(fighter.health, 0);
        assert!(fighter.is_knocked_out());
    }

    #[test]
    fn energy_is_clamped_and_spend_is_atomic() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.add_energy(70);
        fighter.add_energy(70);
        assert_eq!(fighter.energy, 100);

        fighter.energy = 30;
        assert!(!fighter.use_energy(50));
        assert_eq!(fighter.energy, 30);
        assert!(fighter.use_energy(30));
        assert_eq!(fighter.energy, 0);
    }

    #[test]
    fn trickle_accumulates_tenths() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        for _ in 0..9 {
            fighter.trickle_energy(1);
        }
        assert_eq!(fighter.energy, 0);
        fighter.trickle_energy(1);
        assert_eq!(fighter.energy, 1);
    }

    #[test]
    fn block_is_refused_while_attacking() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.begin_attack(AttackKind::Light, Millis(0), 400);
        assert!(!fighter.set_blocking(true));
        assert!(!fighter.is_blocking());
    }

    #[test]
    fn flags_expire_against_simulation_time() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.begin_attack(AttackKind::Heavy, Millis(1000), 700);
        assert!(fighter.start_jump(Millis(1000), 800));
        assert!(!fighter.start_jump(Millis(1100), 800));

        fighter.expire(Millis(1699));
        assert!(fighter.is_attacking());
        fighter.expire(Millis(1700));
        assert!(!fighter.is_attacking());
        assert!(fighter.is_jumping());
        fighter.expire(Millis(1800));
        assert!(!fighter.is_jumping());
    }

    #[test]
    fn reset_discards_pending_deadlines_and_keeps_identity() {
        let mut fighter = Fighter::new(&profile()).unwrap();
        fighter.begin_attack(AttackKind::Special, Millis(500), 1000);
        fighter.start_jump(Millis(500), 800);
        fighter.health = 12;
        fighter.energy = 77;
        fighter.combo_counter = 3;

        fighter.reset(80.0, Direction::Left);

        assert!(!fighter.is_attacking());
        assert!(!fighter.is_jumping());
        assert_eq!(fighter.health, 100);
        assert_eq!(fighter.energy, 0);
        assert_eq!(fighter.combo_counter, 0);
        assert_eq!(fighter.last_move_time, None);
        assert_eq!(fighter.position, 80.0);
        assert_eq!(fighter.direction, Direction::Left);
        assert_eq!(fighter.name(), "CLIPPY");
        assert_eq!(fighter.power(), 85);
    }

    #[test]
    fn health_and_energy_stay_bounded_under_mixed_updates() {
        use crate::env::{PcgRng, RngSource};

        for seed in 0..20 {
            let mut rng = PcgRng::seed_from_u64(seed);
            let mut fighter = Fighter::new(&profile()).unwrap();
            for _ in 0..500 {
                let amount = rng.range_i32(0, 150) as u32;
                match rng.index(5) {
                    Some(0) => {
                        fighter.take_damage(amount);
                    }
                    Some(1) => fighter.add_energy(amount),
                    Some(2) => fighter.trickle_energy(amount % 20),
                    Some(3) => {
                        fighter.use_energy(amount);
                    }
                    _ => {
                        fighter.set_blocking(rng.chance(0.5));
                    }
                }
                assert!(fighter.health <= MAX_HEALTH);
                assert!(fighter.energy <= MAX_ENERGY);
            }
        }
    }
}
