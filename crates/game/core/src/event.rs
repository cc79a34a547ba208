//! Notifications surfaced to rendering and UI collaborators.

use crate::state::{EntityId, Position};

/// Something a renderer, HUD or log may want to react to.
///
/// Events are returned in the order they happened; the core never pushes them
/// anywhere on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A level was built and its session started.
    LevelStarted { name: String, max_moves: u32 },

    /// The move counter changed.
    MovesChanged { remaining: u32 },

    /// A tongue path is ready for animation.
    TonguePathComputed { frog: EntityId, path: Vec<Position> },

    /// The topmost object at `position` was removed (despawn visuals).
    TileTopmostRemoved { position: Position },

    /// A frog caught its grapes and was deactivated.
    FrogFed { frog: EntityId },

    LevelComplete,

    LevelFailed,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::LevelStarted { .. } => "level_started",
            GameEvent::MovesChanged { .. } => "moves_changed",
            GameEvent::TonguePathComputed { .. } => "tongue_path_computed",
            GameEvent::TileTopmostRemoved { .. } => "tile_topmost_removed",
            GameEvent::FrogFed { .. } => "frog_fed",
            GameEvent::LevelComplete => "level_complete",
            GameEvent::LevelFailed => "level_failed",
        }
    }
}
