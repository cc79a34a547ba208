use arrayvec::ArrayVec;

use super::{Entity, EntityId, EntityKind, Position};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

type ObjectStack = ArrayVec<Entity, { GameConfig::MAX_OBJECTS_PER_TILE }>;

/// Errors raised when stacking objects on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileError {
    #[error("tile {position} already has its ground cell; cells cannot be stacked")]
    CellNotStackable { position: Position },

    #[error("tile {position} cannot hold more than {capacity} objects")]
    StackFull { position: Position, capacity: usize },
}

impl GameError for TileError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TileError::CellNotStackable { .. } => ErrorSeverity::Internal,
            TileError::StackFull { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TileError::CellNotStackable { .. } => "TILE_CELL_NOT_STACKABLE",
            TileError::StackFull { .. } => "TILE_STACK_FULL",
        }
    }
}

/// A board square: the ground cell plus the objects stacked on it.
///
/// # Invariants
///
/// - The ground cell is implicit and unique; [`Tile::push`] refuses `Cell` entities,
///   so the cell is always the base and never the topmost object.
/// - Insertion order is stacking order; only the last object is active.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    cell: EntityId,
    objects: ObjectStack,
}

impl Tile {
    pub fn new(position: Position, cell: EntityId) -> Self {
        Self {
            position,
            cell,
            objects: ObjectStack::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Identity of the ground cell.
    pub fn cell(&self) -> EntityId {
        self.cell
    }

    /// Stacks `entity` on top of the existing objects.
    pub fn push(&mut self, entity: Entity) -> Result<(), TileError> {
        if matches!(entity.kind, EntityKind::Cell) {
            return Err(TileError::CellNotStackable {
                position: self.position,
            });
        }

        self.objects
            .try_push(entity)
            .map_err(|_| TileError::StackFull {
                position: self.position,
                capacity: GameConfig::MAX_OBJECTS_PER_TILE,
            })
    }

    /// The only object considered for interaction.
    pub fn topmost(&self) -> Option<&Entity> {
        self.objects.last()
    }

    pub fn topmost_mut(&mut self) -> Option<&mut Entity> {
        self.objects.last_mut()
    }

    pub fn remove_topmost(&mut self) -> Option<Entity> {
        self.objects.pop()
    }

    /// Objects from bottom to top.
    pub fn objects(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
