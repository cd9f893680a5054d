//! Primitive value types shared by fighter and match state.

use core::ops::Add;

/// Discrete simulation step counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    /// Returns the tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Simulation time in milliseconds since the controller was created.
///
/// Derived from the tick counter, never from a wall clock, so expiry checks
/// are reproducible and stop advancing while a match is paused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is in the future).
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Simulation time reached after `tick` steps at `tick_rate_hz`.
    pub fn at_tick(tick: Tick, tick_rate_hz: u32) -> Self {
        Self(tick.0 * 1000 / u64::from(tick_rate_hz.max(1)))
    }
}

impl Add<u64> for Millis {
    type Output = Millis;
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

/// Which of the two combatants an event or result refers to.
///
/// `Player1` is the human-controlled fighter, `Player2` the scripted opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    /// Array index of this side in `[player1, player2]` storage.
    pub const fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

/// Horizontal facing. Presentation only; combat never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Facing for a fighter at `own` looking at an opponent at `other`.
    pub fn toward(own: f64, other: f64) -> Self {
        if own <= other {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_follow_tick_rate() {
        assert_eq!(Millis::at_tick(Tick(60), 60), Millis(1000));
        assert_eq!(Millis::at_tick(Tick(1), 60), Millis(16));
        assert_eq!(Millis::at_tick(Tick(2), 60), Millis(33));
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Millis(100).since(Millis(250)), 0);
        assert_eq!(Millis(250).since(Millis(100)), 150);
    }

    #[test]
    fn side_parses_from_snake_case() {
        assert_eq!("player2".parse::<Side>().unwrap(), Side::Player2);
        assert_eq!(Side::Player1.to_string(), "player1");
        assert_eq!(Side::Player1.opponent(), Side::Player2);
    }
}
