//! Asynchronous abstraction for sourcing the human player's input.
//!
//! Runtime users plug in [`InputProvider`] implementations so the simulation
//! can run with live keyboard/gamepad input, scripted fixtures, or nothing.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fight_core::{InputSignal, MatchSnapshot};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// Trait for providing player 1's input once per simulation tick.
///
/// Different implementations can handle:
/// - Live input captured by a frontend
/// - Scripted/replayed input
/// - Testing fixtures
#[async_trait]
pub trait InputProvider: Send + Sync {
    /// Provide the input for the next tick.
    ///
    /// # Arguments
    /// * `snapshot` - Read-only view of the match before the tick
    async fn provide_input(&self, snapshot: &MatchSnapshot) -> Result<InputSignal>;
}

/// Never presses anything.
pub struct IdleInputProvider;

#[async_trait]
impl InputProvider for IdleInputProvider {
    async fn provide_input(&self, _snapshot: &MatchSnapshot) -> Result<InputSignal> {
        Ok(InputSignal::IDLE)
    }
}

/// Replays a fixed input script, one entry per tick, wrapping at the end.
///
/// An empty script has nothing to replay and fails every request.
pub struct ScriptedInputProvider {
    script: Vec<InputSignal>,
    cursor: AtomicUsize,
}

impl ScriptedInputProvider {
    pub fn new(script: impl IntoIterator<Item = InputSignal>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Ticks served so far.
    pub fn served(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl InputProvider for ScriptedInputProvider {
    async fn provide_input(&self, _snapshot: &MatchSnapshot) -> Result<InputSignal> {
        if self.script.is_empty() {
            return Err(RuntimeError::InputProvider("input script is empty".into()));
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        Ok(self.script[idx % self.script.len()])
    }
}

/// Input written by a frontend and read by the simulation.
///
/// Clones share the same slot. Held controls persist until overwritten; attack
/// requests are latched until the next tick consumes them, so a press that
/// lands between two ticks is not lost.
#[derive(Clone, Default)]
pub struct SharedInputProvider {
    latest: Arc<Mutex<InputSignal>>,
}

impl SharedInputProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held controls and latches any attack requests.
    pub async fn set(&self, input: InputSignal) {
        let mut latest = self.latest.lock().await;
        *latest = InputSignal {
            light_attack: latest.light_attack || input.light_attack,
            heavy_attack: latest.heavy_attack || input.heavy_attack,
            special: latest.special || input.special,
            ..input
        };
    }

    /// Releases every control and drops pending attack requests.
    pub async fn clear(&self) {
        *self.latest.lock().await = InputSignal::IDLE;
    }
}

#[async_trait]
impl InputProvider for SharedInputProvider {
    async fn provide_input(&self, _snapshot: &MatchSnapshot) -> Result<InputSignal> {
        let mut latest = self.latest.lock().await;
        let input = *latest;
        *latest = input.without_attacks();
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{FighterView, MatchPhase, Tick};

    fn snapshot() -> MatchSnapshot {
        let view = FighterView {
            name: "A".into(),
            color: String::new(),
            health: 100,
            energy: 0,
            position: 20.0,
            direction: fight_core::Direction::Right,
            is_attacking: false,
            is_blocking: false,
            is_jumping: false,
            combo_counter: 0,
        };
        MatchSnapshot {
            tick: Tick::ZERO,
            phase: MatchPhase::RoundActive,
            paused: false,
            round: 1,
            fight_timer: 99,
            player1_wins: 0,
            player2_wins: 0,
            fighters: [view.clone(), view],
        }
    }

    #[tokio::test]
    async fn scripted_provider_cycles() {
        let jab = InputSignal {
            light_attack: true,
            ..InputSignal::IDLE
        };
        let provider = ScriptedInputProvider::new([jab, InputSignal::IDLE]);
        let snap = snapshot();

        assert_eq!(provider.provide_input(&snap).await.unwrap(), jab);
        assert_eq!(provider.provide_input(&snap).await.unwrap(), InputSignal::IDLE);
        assert_eq!(provider.provide_input(&snap).await.unwrap(), jab);
        assert_eq!(provider.served(), 3);
    }

    #[tokio::test]
    async fn empty_script_reports_a_provider_error() {
        let provider = ScriptedInputProvider::new([]);

        let err = provider.provide_input(&snapshot()).await.unwrap_err();
        assert!(matches!(err, RuntimeError::InputProvider(_)));
        assert_eq!(provider.served(), 0);
    }

    #[tokio::test]
    async fn shared_provider_latches_attacks_once() {
        let provider = SharedInputProvider::new();
        let frontend = provider.clone();
        let snap = snapshot();

        frontend
            .set(InputSignal {
                heavy_attack: true,
                ..InputSignal::IDLE
            })
            .await;
        frontend
            .set(InputSignal {
                right: true,
                ..InputSignal::IDLE
            })
            .await;

        let first = provider.provide_input(&snap).await.unwrap();
        assert!(first.heavy_attack && first.right);

        let second = provider.provide_input(&snap).await.unwrap();
        assert!(!second.heavy_attack);
        assert!(second.right);

        frontend.clear().await;
        assert_eq!(provider.provide_input(&snap).await.unwrap(), InputSignal::IDLE);
    }
}
