//! Normalized per-tick input for the human-controlled fighter.

/// Held/pressed state of every control for one tick.
///
/// Movement flags are held state. The three attack flags are edge requests:
/// front-ends set them on the tick a key goes down and the controller consumes
/// them once. When several attack flags are set only the first accepted one
/// (light, heavy, special) fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSignal {
    pub left: bool,
    pub right: bool,
    /// Jump.
    pub up: bool,
    /// Block.
    pub down: bool,
    pub light_attack: bool,
    pub heavy_attack: bool,
    pub special: bool,
}

impl InputSignal {
    /// No control held.
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        up: false,
        down: false,
        light_attack: false,
        heavy_attack: false,
        special: false,
    };

    /// Net horizontal direction: -1, 0 or 1.
    pub fn horizontal(&self) -> i8 {
        i8::from(self.right) - i8::from(self.left)
    }

    pub fn has_attack_request(&self) -> bool {
        self.light_attack || self.heavy_attack || self.special
    }

    /// Copy of this signal with the one-shot attack requests cleared.
    pub fn without_attacks(self) -> Self {
        Self {
            light_attack: false,
            heavy_attack: false,
            special: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_directions_cancel() {
        let input = InputSignal {
            left: true,
            right: true,
            ..InputSignal::IDLE
        };
        assert_eq!(input.horizontal(), 0);
        assert_eq!(
            InputSignal {
                left: true,
                ..InputSignal::IDLE
            }
            .horizontal(),
            -1
        );
    }

    #[test]
    fn without_attacks_keeps_movement() {
        let input = InputSignal {
            right: true,
            down: true,
            heavy_attack: true,
            ..InputSignal::IDLE
        };
        let held = input.without_attacks();
        assert!(!held.has_attack_request());
        assert!(held.right && held.down);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_default_to_released() {
        let input: InputSignal = serde_json::from_str(r#"{"light_attack":true}"#).unwrap();
        assert_eq!(
            input,
            InputSignal {
                light_attack: true,
                ..InputSignal::IDLE
            }
        );
    }
}
