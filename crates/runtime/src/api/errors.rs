//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from match construction, worker coordination and input
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use fight_core::{ConfigError, FighterError, MatchError, Side};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} fighter not set")]
    MissingFighter { side: Side },

    #[error("invalid fighter")]
    InvalidFighter(#[from] FighterError),

    #[error("invalid match configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("input provider failed: {0}")]
    InputProvider(String),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("simulation worker stopped before the match ended")]
    MatchAbandoned,
}
