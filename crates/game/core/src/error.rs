//! Common error infrastructure for fight-core.
//!
//! The error taxonomy is deliberately narrow. Only construction-time problems
//! (bad roster data, bad configuration) and phase misuse of the controller are
//! errors. Gameplay rejections such as attacking while already attacking are
//! reported as `None` by the combat functions and never surface here.

use crate::state::MatchPhase;

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was valid in general but not in the current state.
    ///
    /// Examples: beginning a match that is already running
    Recoverable,

    /// Invalid input; the caller must change it before trying again.
    ///
    /// Examples: attribute above 100, empty move list, zero tick rate
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all fight-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Fighter construction failed; no partially built fighter is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FighterError {
    #[error("fighter name must not be empty")]
    EmptyName,

    #[error("fighter '{name}': {attribute} must be within 0..=100 (got {value})")]
    AttributeOutOfRange {
        name: String,
        attribute: &'static str,
        value: u32,
    },

    #[error("fighter '{name}' has no special moves")]
    NoSpecialMoves { name: String },
}

impl GameError for FighterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "FIGHTER_EMPTY_NAME",
            Self::AttributeOutOfRange { .. } => "FIGHTER_ATTRIBUTE_OUT_OF_RANGE",
            Self::NoSpecialMoves { .. } => "FIGHTER_NO_SPECIAL_MOVES",
        }
    }
}

/// Invalid combat or match configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("opponent difficulty must be within (0, 1] (got {0})")]
    InvalidDifficulty(f64),

    #[error("{field} must be a probability within [0, 1] (got {value})")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("{field} range is empty: min {min} > max {max}")]
    InvalidRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{field} must be at most {max} (got {value})")]
    AboveMaximum {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("arena bounds are inverted: min {min} >= max {max}")]
    InvalidArena { min: f64, max: f64 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::InvalidDifficulty(_) => "CONFIG_INVALID_DIFFICULTY",
            Self::InvalidProbability { .. } => "CONFIG_INVALID_PROBABILITY",
            Self::InvalidRange { .. } => "CONFIG_INVALID_RANGE",
            Self::AboveMaximum { .. } => "CONFIG_ABOVE_MAXIMUM",
            Self::InvalidArena { .. } => "CONFIG_INVALID_ARENA",
        }
    }
}

/// A controller operation was requested in a phase that does not allow it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("operation requires phase {expected}, match is in {actual}")]
    InvalidPhase {
        expected: MatchPhase,
        actual: MatchPhase,
    },
}

impl GameError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPhase { .. } => "MATCH_INVALID_PHASE",
        }
    }
}
