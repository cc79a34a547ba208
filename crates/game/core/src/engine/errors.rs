//! Error types for the action execution pipeline.

use crate::action::{ActionTransition, CommitTongueAction, FireTongueAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("fire action failed: {0}")]
    Fire(TransitionPhaseError<<FireTongueAction as ActionTransition>::Error>),

    #[error("commit action failed: {0}")]
    Commit(TransitionPhaseError<<CommitTongueAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Phase of the pipeline that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Fire(inner) => inner.phase,
            ExecuteError::Commit(inner) => inner.phase,
        }
    }

    /// True when the action was rejected before any state was touched.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, ExecuteError::Fire(_))
            || self.phase() == TransitionPhase::PreValidate
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Fire(inner) => inner.error.severity(),
            ExecuteError::Commit(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Fire(inner) => inner.error.error_code(),
            ExecuteError::Commit(inner) => inner.error.error_code(),
        }
    }
}
