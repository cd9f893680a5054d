//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to run a match.

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use fight_core::{
    Fighter, FighterProfile, MatchConfig, MatchController, MatchResult, PcgRng, Side, Stage,
};
use tracing::info;

use crate::api::{IdleInputProvider, InputProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// How the simulation worker paces its ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pacing {
    /// One tick per `1 / tick_rate_hz` seconds of wall-clock time.
    #[default]
    Realtime,
    /// Tick as fast as the executor allows. Simulation time is unaffected.
    Unpaced,
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub match_config: MatchConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    pub pacing: Pacing,
    /// Seed for the match RNG. Drawn from entropy when unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            pacing: Pacing::Realtime,
            seed: None,
        }
    }
}

/// Main runtime that runs one match on a background worker
///
/// Design: Runtime owns the worker task.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the match RNG was created from, for replaying the match.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Wait until the match is over.
    pub async fn wait_for_match_end(&self) -> Result<MatchResult> {
        self.handle.wait_for_result().await
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once this handle and every clone of it are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    player1: Option<FighterProfile>,
    player2: Option<FighterProfile>,
    stage: Option<Stage>,
    input_provider: Option<Box<dyn InputProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            player1: None,
            player2: None,
            stage: None,
            input_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the human-controlled fighter (required)
    pub fn player1(mut self, profile: FighterProfile) -> Self {
        self.player1 = Some(profile);
        self
    }

    /// Set the policy-controlled fighter (required)
    pub fn player2(mut self, profile: FighterProfile) -> Self {
        self.player2 = Some(profile);
        self
    }

    /// Set the stage. Without one, no hazards fire.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Set player 1's input provider (defaults to [`IdleInputProvider`])
    pub fn input_provider(mut self, provider: impl InputProvider + 'static) -> Self {
        self.input_provider = Some(Box::new(provider));
        self
    }

    /// Fix the RNG seed so the match replays identically.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime and spawn the simulation worker
    ///
    /// The match waits in character select until [`RuntimeHandle::begin`].
    pub async fn build(self) -> Result<Runtime> {
        let player1 = self.player1.ok_or(RuntimeError::MissingFighter {
            side: Side::Player1,
        })?;
        let player2 = self.player2.ok_or(RuntimeError::MissingFighter {
            side: Side::Player2,
        })?;

        let controller = MatchController::new(
            self.config.match_config.clone(),
            Fighter::new(&player1)?,
            Fighter::new(&player2)?,
            self.stage,
        )?;

        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        info!(
            target: "runtime",
            seed,
            player1 = %player1.name,
            player2 = %player2.name,
            stage = controller.stage().map(|stage| stage.name.as_str()).unwrap_or("none"),
            "Match runtime starting"
        );

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (result_tx, result_rx) = watch::channel(None);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), result_rx);

        let input = self
            .input_provider
            .unwrap_or_else(|| Box::new(IdleInputProvider));

        let sim_worker = SimulationWorker::new(
            controller,
            Box::new(PcgRng::seed_from_u64(seed)),
            input,
            command_rx,
            event_bus,
            result_tx,
            self.config.pacing,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            seed,
            sim_worker_handle,
        })
    }
}
