//! Attack and special-move initiation.

use crate::config::CombatConfig;
use crate::env::RngSource;
use crate::state::{Fighter, Millis};

/// Every kind of attack that can deal damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Light,
    Heavy,
    Special,
}

/// Attacks started through [`perform_attack`]. Specials have their own entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BasicAttack {
    Light,
    Heavy,
}

impl From<BasicAttack> for AttackKind {
    fn from(attack: BasicAttack) -> Self {
        match attack {
            BasicAttack::Light => AttackKind::Light,
            BasicAttack::Heavy => AttackKind::Heavy,
        }
    }
}

/// Describes an attack that was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDescriptor {
    pub kind: AttackKind,
    pub duration_ms: u64,
    /// True when the combo counter exceeds one after this attack.
    pub is_combo: bool,
    /// Display name of the special move; `None` for light and heavy attacks.
    pub move_name: Option<String>,
}

/// Starts a light or heavy attack.
///
/// Rejected (returns `None`, no mutation) while the fighter is attacking or
/// blocking. Otherwise the fighter attacks for the configured duration, gains
/// energy, and the combo counter either grows (previous attack started less
/// than `combo_window_ms` ago) or resets to zero.
pub fn perform_attack(
    fighter: &mut Fighter,
    attack: BasicAttack,
    now: Millis,
    config: &CombatConfig,
) -> Option<AttackDescriptor> {
    if !fighter.can_act() {
        return None;
    }

    let kind = AttackKind::from(attack);
    let tuning = *config.tuning(kind);

    fighter.begin_attack(kind, now, tuning.duration_ms);
    fighter.add_energy(tuning.energy_gain);

    match fighter.last_move_time {
        Some(last) if now.since(last) < config.combo_window_ms => fighter.combo_counter += 1,
        _ => fighter.combo_counter = 0,
    }
    fighter.last_move_time = Some(now);

    Some(AttackDescriptor {
        kind,
        duration_ms: tuning.duration_ms,
        is_combo: fighter.combo_counter > 1,
        move_name: None,
    })
}

/// Starts a special move, spending `special_cost` energy.
///
/// Rejected while attacking or blocking, or when energy is below the cost.
/// The move name is drawn uniformly from the fighter's list and is purely
/// cosmetic. Specials do not touch the combo counter.
pub fn perform_special_move(
    fighter: &mut Fighter,
    now: Millis,
    config: &CombatConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> Option<AttackDescriptor> {
    if fighter.energy < config.special_cost || !fighter.can_act() {
        return None;
    }
    if !fighter.use_energy(config.special_cost) {
        return None;
    }

    let duration_ms = config.special.duration_ms;
    fighter.begin_attack(AttackKind::Special, now, duration_ms);

    let names = fighter.special_move_names();
    let move_name = rng
        .index(names.len())
        .map(|idx| names[idx].clone())
        .unwrap_or_default();

    Some(AttackDescriptor {
        kind: AttackKind::Special,
        duration_ms,
        is_combo: false,
        move_name: Some(move_name),
    })
}
