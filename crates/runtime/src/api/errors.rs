//! Unified error types surfaced by the runtime API.
//!
//! Wraps core execution and level failures so clients can bubble them up with
//! consistent context.
use frog_core::{EntityId, ErrorSeverity, ExecuteError, GameError, LevelError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tongue of frog {frog} is still in flight")]
    TongueInFlight { frog: EntityId },

    #[error("no tongue in flight")]
    NoTongueInFlight,

    #[error("no level loaded")]
    NoLevelLoaded,

    #[error("level '{current}' is the last one")]
    NoNextLevel { current: String },

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("failed to build level")]
    Level(#[from] LevelError),
}

impl RuntimeError {
    /// True when the request was refused without changing any state.
    pub fn is_invalid_move(&self) -> bool {
        match self {
            RuntimeError::TongueInFlight { .. } | RuntimeError::NoTongueInFlight => true,
            RuntimeError::Execute(error) => error.is_invalid_move(),
            RuntimeError::NoLevelLoaded
            | RuntimeError::NoNextLevel { .. }
            | RuntimeError::Level(_) => false,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::TongueInFlight { .. } | RuntimeError::NoTongueInFlight => {
                ErrorSeverity::Recoverable
            }
            RuntimeError::NoLevelLoaded | RuntimeError::NoNextLevel { .. } => {
                ErrorSeverity::Validation
            }
            RuntimeError::Execute(error) => error.severity(),
            RuntimeError::Level(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::TongueInFlight { .. } => "RUNTIME_TONGUE_IN_FLIGHT",
            RuntimeError::NoTongueInFlight => "RUNTIME_NO_TONGUE_IN_FLIGHT",
            RuntimeError::NoLevelLoaded => "RUNTIME_NO_LEVEL_LOADED",
            RuntimeError::NoNextLevel { .. } => "RUNTIME_NO_NEXT_LEVEL",
            RuntimeError::Execute(error) => error.error_code(),
            RuntimeError::Level(error) => error.error_code(),
        }
    }
}
