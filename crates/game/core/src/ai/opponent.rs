//! Cooldown-gated opponent decision policy.

use crate::config::CombatConfig;
use crate::env::RngSource;
use crate::error::ConfigError;
use crate::state::{Fighter, Millis};

/// Action the policy asks the controller to perform for its fighter.
///
/// Blocking and walking are applied by the policy itself and are not emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyAction {
    Light,
    Heavy,
    Special,
    /// The jump has already been started on the fighter.
    Jump,
}

/// Decision policy for the computer-controlled fighter.
///
/// Invoked once per tick. Between decisions it waits out a cooldown counted in
/// ticks. Each decision draws a single sample `r` and compares it against
/// thresholds scaled by `difficulty`:
///
/// | situation                        | threshold          | outcome                     |
/// |----------------------------------|--------------------|-----------------------------|
/// | opponent attacking               | `r < 0.7·d`        | block, cooldown 20          |
/// | within 15 units, energy ≥ cost   | `r < 0.1·d`        | special                     |
/// | within 15 units                  | `r < 0.3·d`        | heavy                       |
/// | within 15 units                  | `r < 0.5·d`        | light                       |
/// | farther                          | always             | walk toward opponent        |
/// | farther, grounded                | `r < 0.02·d`       | jump                        |
///
/// Any decision that does not block resets the cooldown to 10.
///
/// The policy reads the opponent but only ever mutates its own fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentPolicy {
    difficulty: f64,
    cooldown: u32,
}

impl OpponentPolicy {
    pub const BLOCK_COOLDOWN: u32 = 20;
    pub const DECISION_COOLDOWN: u32 = 10;
    pub const ENGAGE_DISTANCE: f64 = 15.0;
    pub const BLOCK_CHANCE: f64 = 0.7;
    pub const SPECIAL_CHANCE: f64 = 0.1;
    pub const HEAVY_CHANCE: f64 = 0.3;
    pub const LIGHT_CHANCE: f64 = 0.5;
    pub const JUMP_CHANCE: f64 = 0.02;
    /// Walk distance per tick at speed 100.
    pub const WALK_STEP: f64 = 0.5;

    /// `difficulty` must lie in `(0, 1]`.
    pub fn new(difficulty: f64) -> Result<Self, ConfigError> {
        if !(difficulty > 0.0 && difficulty <= 1.0) {
            return Err(ConfigError::InvalidDifficulty(difficulty));
        }
        Ok(Self {
            difficulty,
            cooldown: 0,
        })
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Ticks left before the next decision.
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Clears the cooldown so the next tick decides immediately.
    pub fn reset(&mut self) {
        self.cooldown = 0;
    }

    /// Runs one tick of the policy for `own` against `opponent`.
    pub fn decide(
        &mut self,
        own: &mut Fighter,
        opponent: &Fighter,
        now: Millis,
        config: &CombatConfig,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Option<PolicyAction> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let d = self.difficulty;
        let r = rng.next_f64();

        // The block branch holds even when a busy fighter cannot raise its guard.
        if opponent.is_attacking() && r < Self::BLOCK_CHANCE * d {
            own.set_blocking(true);
            self.cooldown = Self::BLOCK_COOLDOWN;
            return None;
        }

        own.set_blocking(false);
        self.cooldown = Self::DECISION_COOLDOWN;

        if own.distance_to(opponent) < Self::ENGAGE_DISTANCE {
            return if r < Self::SPECIAL_CHANCE * d && own.energy >= config.special_cost {
                Some(PolicyAction::Special)
            } else if r < Self::HEAVY_CHANCE * d {
                Some(PolicyAction::Heavy)
            } else if r < Self::LIGHT_CHANCE * d {
                Some(PolicyAction::Light)
            } else {
                None
            };
        }

        if !own.is_attacking() {
            let step = Self::WALK_STEP * f64::from(own.speed()) / 100.0;
            let delta = if own.position < opponent.position {
                step
            } else {
                -step
            };
            own.shift(delta, config.arena_min, config.arena_max);
        }

        if r < Self::JUMP_CHANCE * d && own.start_jump(now, config.jump_duration_ms) {
            return Some(PolicyAction::Jump);
        }

        None
    }
}
