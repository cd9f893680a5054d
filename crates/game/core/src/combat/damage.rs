//! Damage calculation.

use crate::config::CombatConfig;
use crate::env::RngSource;
use crate::state::Fighter;

use super::attack::AttackKind;

/// Calculate the damage `attacker` deals to `defender` with an attack of `kind`.
///
/// # Formula
///
/// ```text
/// base   = light 5 | heavy 10 | special 20
/// damage = round(base × power/100 × (2 − intelligence/100))
///
/// if attacker.combo_counter > 1:
///     damage = round(damage × (1 + combo_counter × 0.2))
///
/// damage = max(damage + jitter, 1)     jitter ∈ {−1, 0, 1}
/// ```
///
/// Rounding is half-up. Blocking is not considered here; it is applied by
/// [`Fighter::take_damage`].
pub fn calculate_damage(
    attacker: &Fighter,
    defender: &Fighter,
    kind: AttackKind,
    config: &CombatConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> u32 {
    let base = f64::from(config.tuning(kind).base_damage);
    let power_modifier = f64::from(attacker.power()) / 100.0;
    let defense_modifier = f64::from(defender.intelligence()) / 100.0;

    let mut damage = round_half_up(base * power_modifier * (2.0 - defense_modifier));

    if attacker.combo_counter > 1 {
        let multiplier = 1.0 + f64::from(attacker.combo_counter) * config.combo_step;
        damage = round_half_up(damage as f64 * multiplier);
    }

    let jitter = i64::from(rng.range_i32(-1, 1));

    (damage + jitter).max(1) as u32
}

/// Round-half-up for the non-negative values produced by the damage formula.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
