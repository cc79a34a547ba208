//! Errors produced by tongue actions.
//!
//! Triggering failures are invalid moves: they are reported to the caller and
//! never consume a move or touch the board.

use crate::error::{ErrorSeverity, GameError};
use crate::session::SessionPhase;
use crate::state::{EntityId, Position};

/// Reasons a frog cannot fire.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerError {
    #[error("session is {} and does not accept moves", phase.as_str())]
    SessionInactive { phase: SessionPhase },

    #[error("no moves left")]
    OutOfMoves,

    #[error("no tile at {position}")]
    TileNotFound { position: Position },

    #[error("topmost object at {position} is not a frog")]
    NotAFrog { position: Position },

    #[error("frog {frog} at {position} has already been fed")]
    FrogAlreadyFed { frog: EntityId, position: Position },

    #[error("frog {frog} at {position} has nowhere to send its tongue")]
    EmptyPath { frog: EntityId, position: Position },
}

impl GameError for TriggerError {
    fn severity(&self) -> ErrorSeverity {
        use TriggerError::*;
        match self {
            SessionInactive { .. } | OutOfMoves | EmptyPath { .. } => ErrorSeverity::Recoverable,
            TileNotFound { .. } | NotAFrog { .. } | FrogAlreadyFed { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use TriggerError::*;
        match self {
            SessionInactive { .. } => "TRIGGER_SESSION_INACTIVE",
            OutOfMoves => "TRIGGER_OUT_OF_MOVES",
            TileNotFound { .. } => "TRIGGER_TILE_NOT_FOUND",
            NotAFrog { .. } => "TRIGGER_NOT_A_FROG",
            FrogAlreadyFed { .. } => "TRIGGER_FROG_ALREADY_FED",
            EmptyPath { .. } => "TRIGGER_EMPTY_PATH",
        }
    }
}

/// Reasons a pending tongue cannot be committed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitError {
    #[error("session is {} and does not accept moves", phase.as_str())]
    SessionInactive { phase: SessionPhase },

    #[error("frog {frog} is no longer the hungry topmost object at {position}")]
    FrogMissing { frog: EntityId, position: Position },

    #[error("frog {frog} is still hungry in a completed level")]
    FeedDesync { frog: EntityId },
}

impl GameError for CommitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CommitError::SessionInactive { .. } => ErrorSeverity::Recoverable,
            CommitError::FrogMissing { .. } | CommitError::FeedDesync { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommitError::SessionInactive { .. } => "COMMIT_SESSION_INACTIVE",
            CommitError::FrogMissing { .. } => "COMMIT_FROG_MISSING",
            CommitError::FeedDesync { .. } => "COMMIT_FEED_DESYNC",
        }
    }
}
