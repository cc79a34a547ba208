use crate::event::GameEvent;
use crate::session::SessionPhase;
use crate::state::{Color, Direction, EntityId, EntityKind, GameState, Position};
use crate::tongue::{TonguePath, compute_path};

use super::{ActionTransition, TriggerError};

/// A resolved tongue waiting to be committed.
///
/// Produced only by [`FireTongueAction`]; consumed by
/// [`super::CommitTongueAction`], so a path can be committed at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingTongue {
    frog: EntityId,
    path: TonguePath,
}

impl PendingTongue {
    pub fn frog(&self) -> EntityId {
        self.frog
    }

    pub fn origin(&self) -> Position {
        self.path.origin()
    }

    pub fn color(&self) -> Color {
        self.path.color()
    }

    pub fn path(&self) -> &TonguePath {
        &self.path
    }

    /// Event handed to the renderer for animation.
    pub fn path_event(&self) -> GameEvent {
        GameEvent::TonguePathComputed {
            frog: self.frog,
            path: self.path.to_positions(),
        }
    }
}

/// Trigger of the frog standing on top of `origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireTongueAction {
    pub origin: Position,
}

impl FireTongueAction {
    pub fn new(origin: Position) -> Self {
        Self { origin }
    }

    /// Looks up the hungry frog that must be on top of `origin`.
    fn frog(&self, state: &GameState) -> Result<(EntityId, Color, Direction), TriggerError> {
        let position = self.origin;
        let tile = state
            .board
            .tile_at(position)
            .ok_or(TriggerError::TileNotFound { position })?;
        let entity = tile
            .topmost()
            .ok_or(TriggerError::NotAFrog { position })?;

        match entity.kind {
            EntityKind::Frog { fed: false, facing } => Ok((entity.id, entity.color, facing)),
            EntityKind::Frog { fed: true, .. } => Err(TriggerError::FrogAlreadyFed {
                frog: entity.id,
                position,
            }),
            EntityKind::Cell | EntityKind::Grape | EntityKind::Arrow { .. } => {
                Err(TriggerError::NotAFrog { position })
            }
        }
    }
}

impl ActionTransition for FireTongueAction {
    type Error = TriggerError;
    type Result = PendingTongue;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let session = &state.session;
        if session.phase() != SessionPhase::Active {
            return Err(TriggerError::SessionInactive {
                phase: session.phase(),
            });
        }
        if !session.can_move() {
            return Err(TriggerError::OutOfMoves);
        }

        self.frog(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let (frog, color, facing) = self.frog(state)?;
        let path = compute_path(
            &state.board,
            self.origin,
            facing,
            color,
            state.config.max_path_steps,
        );

        if path.is_empty() {
            return Err(TriggerError::EmptyPath {
                frog,
                position: self.origin,
            });
        }

        Ok(PendingTongue { frog, path })
    }
}
