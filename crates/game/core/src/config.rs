//! Combat and match tuning parameters.

use crate::combat::AttackKind;
use crate::error::ConfigError;
use crate::state::MAX_HEALTH;

/// Per-attack-kind tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackTuning {
    /// How long the fighter stays in the attacking state.
    pub duration_ms: u64,
    /// Energy granted to the attacker when the attack starts.
    pub energy_gain: u32,
    /// Base damage before attribute and combo modifiers.
    pub base_damage: u32,
}

impl AttackTuning {
    pub const fn new(duration_ms: u64, energy_gain: u32, base_damage: u32) -> Self {
        Self {
            duration_ms,
            energy_gain,
            base_damage,
        }
    }
}

/// Rules shared by the resolver, the human input handler and the opponent policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Fighters closer than this (arena units) can hit each other.
    pub collision_threshold: f64,
    pub arena_min: f64,
    pub arena_max: f64,
    pub light: AttackTuning,
    pub heavy: AttackTuning,
    pub special: AttackTuning,
    /// Energy consumed by a special move; also the minimum required to start one.
    pub special_cost: u32,
    /// Attacks started within this window of the previous one extend the combo.
    pub combo_window_ms: u64,
    /// Damage multiplier added per combo step once the combo exceeds one.
    pub combo_step: f64,
    pub jump_duration_ms: u64,
    /// Human walk distance per tick on the ground.
    pub walk_step: f64,
    /// Human walk distance per tick while airborne.
    pub air_walk_step: f64,
    /// When set, an attack stops threatening once it has landed a hit.
    /// Off by default: an attacker in range hits on every tick of its swing.
    pub single_connect: bool,
}

impl CombatConfig {
    pub const DEFAULT_COLLISION_THRESHOLD: f64 = 10.0;
    pub const DEFAULT_ARENA_MIN: f64 = 5.0;
    pub const DEFAULT_ARENA_MAX: f64 = 95.0;
    pub const DEFAULT_SPECIAL_COST: u32 = 50;
    pub const DEFAULT_COMBO_WINDOW_MS: u64 = 1000;
    pub const DEFAULT_JUMP_DURATION_MS: u64 = 800;

    pub fn new() -> Self {
        Self {
            collision_threshold: Self::DEFAULT_COLLISION_THRESHOLD,
            arena_min: Self::DEFAULT_ARENA_MIN,
            arena_max: Self::DEFAULT_ARENA_MAX,
            light: AttackTuning::new(400, 5, 5),
            heavy: AttackTuning::new(700, 10, 10),
            special: AttackTuning::new(1000, 0, 20),
            special_cost: Self::DEFAULT_SPECIAL_COST,
            combo_window_ms: Self::DEFAULT_COMBO_WINDOW_MS,
            combo_step: 0.2,
            jump_duration_ms: Self::DEFAULT_JUMP_DURATION_MS,
            walk_step: 1.0,
            air_walk_step: 0.5,
            single_connect: false,
        }
    }

    pub fn tuning(&self, kind: AttackKind) -> &AttackTuning {
        match kind {
            AttackKind::Light => &self.light,
            AttackKind::Heavy => &self.heavy,
            AttackKind::Special => &self.special,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_min < self.arena_max) {
            return Err(ConfigError::InvalidArena {
                min: self.arena_min,
                max: self.arena_max,
            });
        }
        if self.collision_threshold <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "collision_threshold",
            });
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Round/match structure and pacing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub max_rounds: u32,
    /// Fight timer value at the start of each round, in seconds.
    pub round_seconds: u32,
    /// Simulation ticks per second.
    pub tick_rate_hz: u32,
    pub versus_announce_ms: u64,
    pub round_announce_ms: u64,
    pub round_end_delay_ms: u64,
    /// Passive energy regeneration per tick, in tenths of an energy point.
    pub energy_trickle_tenths: u32,
    /// Probability per active tick that the stage hazard fires.
    pub hazard_chance: f64,
    pub hazard_damage_min: u32,
    pub hazard_damage_max: u32,
    pub player1_start: f64,
    pub player2_start: f64,
    /// Opponent policy difficulty in (0, 1].
    pub opponent_difficulty: f64,
    pub combat: CombatConfig,
}

impl MatchConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 3;
    pub const DEFAULT_ROUND_SECONDS: u32 = 99;
    pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
    pub const DEFAULT_DIFFICULTY: f64 = 0.7;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            round_seconds: Self::DEFAULT_ROUND_SECONDS,
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
            versus_announce_ms: 3000,
            round_announce_ms: 2000,
            round_end_delay_ms: 3000,
            energy_trickle_tenths: 1,
            hazard_chance: 0.001,
            hazard_damage_min: 3,
            hazard_damage_max: 7,
            player1_start: 20.0,
            player2_start: 80.0,
            opponent_difficulty: Self::DEFAULT_DIFFICULTY,
            combat: CombatConfig::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NonPositive { field: "max_rounds" });
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::NonPositive {
                field: "round_seconds",
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_rate_hz",
            });
        }
        if !(self.opponent_difficulty > 0.0 && self.opponent_difficulty <= 1.0) {
            return Err(ConfigError::InvalidDifficulty(self.opponent_difficulty));
        }
        if !(0.0..=1.0).contains(&self.hazard_chance) {
            return Err(ConfigError::InvalidProbability {
                field: "hazard_chance",
                value: self.hazard_chance,
            });
        }
        if self.hazard_damage_min > self.hazard_damage_max {
            return Err(ConfigError::InvalidRange {
                field: "hazard_damage",
                min: self.hazard_damage_min,
                max: self.hazard_damage_max,
            });
        }
        if self.hazard_damage_max > MAX_HEALTH {
            return Err(ConfigError::AboveMaximum {
                field: "hazard_damage_max",
                value: self.hazard_damage_max,
                max: MAX_HEALTH,
            });
        }
        self.combat.validate()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
