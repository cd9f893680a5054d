//! Scripted stand-in for a human at the controls.
use async_trait::async_trait;

use fight_core::{InputSignal, MatchSnapshot};
use fight_runtime::{InputProvider, Result};

/// Closes the distance, then alternates heavy and light attacks, spending
/// energy on a special whenever it can. Blocks some of the incoming attacks.
///
/// Decisions depend only on the snapshot, so a seeded match stays
/// reproducible.
#[derive(Clone, Copy, Debug)]
pub struct AggressiveInputProvider {
    /// Distance at which the fighter stops walking and starts swinging.
    reach: f64,
    special_cost: u32,
}

impl AggressiveInputProvider {
    const DEFAULT_REACH: f64 = 8.0;
    const JUMP_EVERY: u64 = 90;
    const BLOCK_EVERY: u64 = 3;

    pub fn new(special_cost: u32) -> Self {
        Self {
            reach: Self::DEFAULT_REACH,
            special_cost,
        }
    }

    pub fn decide(&self, snapshot: &MatchSnapshot) -> InputSignal {
        let [me, them] = &snapshot.fighters;
        let tick = snapshot.tick.0;
        let gap = them.position - me.position;

        if them.is_attacking && tick % Self::BLOCK_EVERY == 0 {
            return InputSignal {
                down: true,
                ..InputSignal::IDLE
            };
        }

        if gap.abs() > self.reach {
            return InputSignal {
                right: gap > 0.0,
                left: gap < 0.0,
                up: tick % Self::JUMP_EVERY == 0,
                ..InputSignal::IDLE
            };
        }

        match tick % 4 {
            0 if me.energy >= self.special_cost => InputSignal {
                special: true,
                ..InputSignal::IDLE
            },
            0 => InputSignal {
                heavy_attack: true,
                ..InputSignal::IDLE
            },
            2 => InputSignal {
                light_attack: true,
                ..InputSignal::IDLE
            },
            _ => InputSignal::IDLE,
        }
    }
}

#[async_trait]
impl InputProvider for AggressiveInputProvider {
    async fn provide_input(&self, snapshot: &MatchSnapshot) -> Result<InputSignal> {
        Ok(self.decide(snapshot))
    }
}
