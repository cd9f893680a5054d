//! Simulation worker that owns the authoritative [`MatchController`].
//!
//! Receives commands from [`crate::RuntimeHandle`], advances the controller
//! once per pacing tick with input pulled from the [`InputProvider`], and
//! publishes every resulting [`MatchEvent`] plus a frame snapshot.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Interval, MissedTickBehavior};

use fight_core::{
    EventCategory, GameError, InputSignal, MatchController, MatchEvent, MatchResult, MatchSnapshot,
    RngSource,
};
use tracing::{debug, info, warn};

use crate::api::{InputProvider, Result};
use crate::events::EventBus;
use crate::runtime::Pacing;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Leave character select and start the match.
    Begin { reply: oneshot::Sender<Result<()>> },
    /// Freeze ticking. Replies with the paused state afterwards.
    Pause { reply: oneshot::Sender<bool> },
    /// Unfreeze ticking. Replies with the paused state afterwards.
    Resume { reply: oneshot::Sender<bool> },
    /// Flip the pause state. Replies with the paused state afterwards.
    TogglePause { reply: oneshot::Sender<bool> },
    /// Return to character select with the same fighters.
    Rematch { reply: oneshot::Sender<()> },
    /// Query the current match snapshot (read-only).
    QuerySnapshot { reply: oneshot::Sender<MatchSnapshot> },
}

/// Drives the tick cadence of the worker loop.
enum Pacer {
    Realtime(Interval),
    Unpaced,
}

impl Pacer {
    fn new(pacing: Pacing, tick_rate_hz: u32) -> Self {
        match pacing {
            Pacing::Realtime => {
                let period = Duration::from_micros(1_000_000 / u64::from(tick_rate_hz.max(1)));
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                Pacer::Realtime(interval)
            }
            Pacing::Unpaced => Pacer::Unpaced,
        }
    }

    async fn wait(&mut self) {
        match self {
            Pacer::Realtime(interval) => {
                interval.tick().await;
            }
            Pacer::Unpaced => tokio::task::yield_now().await,
        }
    }
}

/// Background task that advances the match and processes commands.
pub struct SimulationWorker {
    controller: MatchController,
    rng: Box<dyn RngSource + Send>,
    input: Box<dyn InputProvider>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    result_tx: watch::Sender<Option<MatchResult>>,
    pacing: Pacing,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        controller: MatchController,
        rng: Box<dyn RngSource + Send>,
        input: Box<dyn InputProvider>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        result_tx: watch::Sender<Option<MatchResult>>,
        pacing: Pacing,
    ) -> Self {
        Self {
            controller,
            rng,
            input,
            command_rx,
            event_bus,
            result_tx,
            pacing,
        }
    }

    /// Main worker loop. Exits once every command sender has been dropped.
    pub async fn run(mut self) {
        let mut pacer = Pacer::new(self.pacing, self.controller.config().tick_rate_hz);

        loop {
            let ticking = self.controller.phase().is_running() && !self.controller.is_paused();

            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = pacer.wait(), if ticking => {
                    self.step().await;
                }
            }
        }

        debug!(target: "runtime::worker", "Simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Begin { reply } => {
                let result = match self.controller.begin() {
                    Ok(events) => {
                        self.publish_all(events);
                        Ok(())
                    }
                    Err(error) => {
                        warn!(
                            target: "runtime::worker",
                            error_code = error.error_code(),
                            severity = error.severity().as_str(),
                            error = %error,
                            "Begin rejected"
                        );
                        Err(error.into())
                    }
                };
                let _ = reply.send(result);
            }
            Command::Pause { reply } => {
                let event = self.controller.pause();
                self.publish_all(event);
                let _ = reply.send(self.controller.is_paused());
            }
            Command::Resume { reply } => {
                let event = self.controller.resume();
                self.publish_all(event);
                let _ = reply.send(self.controller.is_paused());
            }
            Command::TogglePause { reply } => {
                let event = self.controller.toggle_pause();
                self.publish_all(event);
                let _ = reply.send(self.controller.is_paused());
            }
            Command::Rematch { reply } => {
                self.controller.reset();
                self.result_tx.send_replace(None);
                info!(target: "runtime::worker", "Match reset for a rematch");
                let _ = reply.send(());
            }
            Command::QuerySnapshot { reply } => {
                let _ = reply.send(self.controller.snapshot());
            }
        }
    }

    async fn step(&mut self) {
        let snapshot = self.controller.snapshot();
        let input = match self.input.provide_input(&snapshot).await {
            Ok(input) => input,
            Err(error) => {
                warn!(
                    target: "runtime::worker",
                    tick = snapshot.tick.0,
                    error = %error,
                    "Input provider failed; treating tick as idle"
                );
                InputSignal::IDLE
            }
        };

        let events = self.controller.tick(&input, self.rng.as_mut());
        self.publish_all(events);
        self.event_bus.publish(self.controller.snapshot());

        if self.result_tx.borrow().is_none() {
            if let Some(result) = self.controller.result() {
                info!(
                    target: "runtime::worker",
                    winner = %result.winner,
                    player1_wins = result.player1_wins,
                    player2_wins = result.player2_wins,
                    rounds = result.rounds_played,
                    "Match finished"
                );
                self.result_tx.send_replace(Some(result));
            }
        }
    }

    fn publish_all(&self, events: impl IntoIterator<Item = MatchEvent>) {
        for event in events {
            log_event(&event);
            self.event_bus.publish(event);
        }
    }
}

fn log_event(event: &MatchEvent) {
    match event.category() {
        EventCategory::Match => info!(target: "runtime::worker", event = ?event, "Match event"),
        EventCategory::Combat => debug!(target: "runtime::worker", event = ?event, "Combat event"),
    }
}
