//! Collision detection between the two fighters.

use crate::config::CombatConfig;
use crate::env::RngSource;
use crate::state::{Fighter, Side};

use super::attack::AttackKind;
use super::damage::calculate_damage;

/// A hit detected by [`check_collision`]. Not yet applied to the target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub attacker: Side,
    pub target: Side,
    pub kind: AttackKind,
    /// Damage before the target's block reduction.
    pub damage: u32,
}

/// Detects whether one fighter's attack reaches the other.
///
/// `a` is reported as [`Side::Player1`] and `b` as [`Side::Player2`].
///
/// When the fighters are closer than `collision_threshold`, `a` hitting `b` is
/// checked first, then `b` hitting `a`. A blocking defender cannot be hit. At
/// most one hit is returned per call even if both sides qualify.
pub fn check_collision(
    a: &Fighter,
    b: &Fighter,
    config: &CombatConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<Hit> {
    if a.distance_to(b) >= config.collision_threshold {
        return None;
    }

    let strike = |attacker: &Fighter, defender: &Fighter| {
        attacker
            .threatening_attack(config.single_connect)
            .filter(|_| !defender.is_blocking())
    };

    let (attacker, target, kind) = if let Some(kind) = strike(a, b) {
        (Side::Player1, Side::Player2, kind)
    } else if let Some(kind) = strike(b, a) {
        (Side::Player2, Side::Player1, kind)
    } else {
        return None;
    };

    let (attacker_state, defender_state) = match attacker {
        Side::Player1 => (a, b),
        Side::Player2 => (b, a),
    };
    let damage = calculate_damage(attacker_state, defender_state, kind, config, rng);

    Some(Hit {
        attacker,
        target,
        kind,
        damage,
    })
}
