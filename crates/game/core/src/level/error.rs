use crate::config::GridDimensions;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, TileError};

/// Problems found while turning a level description into a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    #[error("tile entry at {position} lies outside the {}x{} grid", dimensions.width, dimensions.height)]
    OutOfBounds {
        position: Position,
        dimensions: GridDimensions,
    },

    #[error(transparent)]
    StackOverflow(#[from] TileError),
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelError::OutOfBounds { .. } => "LEVEL_OUT_OF_BOUNDS",
            LevelError::StackOverflow(_) => "LEVEL_STACK_OVERFLOW",
        }
    }
}
