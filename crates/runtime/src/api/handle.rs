//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! controlling the match or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use fight_core::{MatchResult, MatchSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    result_rx: watch::Receiver<Option<MatchResult>>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        result_rx: watch::Receiver<Option<MatchResult>>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            result_rx,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Leave character select and start the versus announcement.
    pub async fn begin(&self) -> Result<()> {
        self.request(|reply| Command::Begin { reply }).await?
    }

    /// Freeze the match. Returns the paused state afterwards.
    pub async fn pause(&self) -> Result<bool> {
        self.request(|reply| Command::Pause { reply }).await
    }

    /// Unfreeze the match. Returns the paused state afterwards.
    pub async fn resume(&self) -> Result<bool> {
        self.request(|reply| Command::Resume { reply }).await
    }

    /// Flip the pause state. Returns the paused state afterwards.
    pub async fn toggle_pause(&self) -> Result<bool> {
        self.request(|reply| Command::TogglePause { reply }).await
    }

    /// Return to character select with the same fighters and clear the result.
    pub async fn rematch(&self) -> Result<()> {
        self.request(|reply| Command::Rematch { reply }).await
    }

    /// Query the current match snapshot (read-only)
    pub async fn snapshot(&self) -> Result<MatchSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Wait until the match reaches its end and return the result.
    ///
    /// Fails with [`RuntimeError::MatchAbandoned`] if the simulation worker
    /// stops first.
    pub async fn wait_for_result(&self) -> Result<MatchResult> {
        let mut rx = self.result_rx.clone();
        let result = rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| RuntimeError::MatchAbandoned)?;
        result.clone().ok_or(RuntimeError::MatchAbandoned)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Match` - Announcements, round results, pause state
    /// - `Topic::Combat` - Attacks, hits, combos, hazards
    /// - `Topic::Frame` - One snapshot per simulated tick
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fight_runtime::Topic;
    ///
    /// let mut rx = handle.subscribe(Topic::Match);
    /// while let Ok(event) = rx.recv().await {
    ///     // Render announcements
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
