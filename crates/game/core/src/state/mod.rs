//! Authoritative simulation state.
//!
//! This module owns the data structures that describe the board and the level
//! session. Runtime layers clone or query this state but mutate it exclusively
//! through the engine.
mod registry;
pub mod types;

pub use registry::TileRegistry;
pub use types::{Color, Direction, Entity, EntityId, EntityKind, Position, Tile, TileError};

use crate::config::GameConfig;
use crate::session::SessionState;

/// Explicit simulation context for one level.
///
/// Everything the rules need travels in this value; there is no global state,
/// so independent sessions (and tests) never interfere.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    /// Tiles and the objects stacked on them.
    pub board: TileRegistry,
    /// Move budget and win/lose phase.
    pub session: SessionState,
}

impl GameState {
    /// Creates a fresh state from the provided sub-components.
    pub fn new(config: GameConfig, board: TileRegistry) -> Self {
        Self {
            config,
            board,
            session: SessionState::new(),
        }
    }

    /// Creates a state with an empty board sized by `config`.
    pub fn empty(config: GameConfig) -> Self {
        let board = TileRegistry::new(config.grid);
        Self::new(config, board)
    }

    /// Replaces the board, e.g. when a level is regenerated.
    pub fn replace_board(&mut self, board: TileRegistry) {
        self.board = board;
    }
}
