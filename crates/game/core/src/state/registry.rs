use std::collections::BTreeMap;

use crate::config::GridDimensions;
use crate::session::FrogCensus;

use super::{Entity, EntityId, Position, Tile};

/// Coordinate → tile lookup for the current level.
///
/// Absence of a tile is the normal outcome at the board edge, so every lookup
/// returns an `Option`. The registry holds no rules of its own.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileRegistry {
    dimensions: GridDimensions,
    tiles: BTreeMap<Position, Tile>,
    /// Sequential entity ID allocator, reset on [`TileRegistry::clear`].
    next_entity_id: u32,
}

impl TileRegistry {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            tiles: BTreeMap::new(),
            next_entity_id: 0,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Inserts `tile` at its own coordinate.
    ///
    /// First registration wins: a second tile for an occupied coordinate is
    /// dropped and `false` is returned.
    pub fn register_tile(&mut self, tile: Tile) -> bool {
        let position = tile.position();
        if self.tiles.contains_key(&position) {
            tracing::warn!("redundant tile registration at {} ignored", position);
            return false;
        }

        tracing::trace!("tile registered at {}", position);
        self.tiles.insert(position, tile);
        true
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        let tile = self.tiles.get(&position);
        if tile.is_none() {
            tracing::trace!("no tile at {}", position);
        }
        tile
    }

    pub fn tile_at_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&position)
    }

    /// Topmost object at `position`, if there is a tile with anything on it.
    pub fn topmost_at(&self, position: Position) -> Option<&Entity> {
        self.tile_at(position).and_then(Tile::topmost)
    }

    /// Removes every tile; used on level teardown and regeneration.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.next_entity_id = 0;
    }

    /// Allocates a new unique EntityId for this level.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    /// Every frog on the board, including ones buried under other objects.
    pub fn frogs(&self) -> impl Iterator<Item = (Position, &Entity)> + '_ {
        self.tiles.values().flat_map(|tile| {
            let position = tile.position();
            tile.objects()
                .filter(|entity| entity.is_frog())
                .map(move |entity| (position, entity))
        })
    }

    /// Aggregate frog population observed by the session state machine.
    pub fn census(&self) -> FrogCensus {
        self.frogs()
            .fold(FrogCensus::default(), |mut census, (_, frog)| {
                census.registered += 1;
                if frog.is_hungry_frog() {
                    census.hungry += 1;
                }
                census
            })
    }

    /// Finds an entity anywhere on the board.
    pub fn find_entity(&self, id: EntityId) -> Option<(Position, &Entity)> {
        self.tiles.values().find_map(|tile| {
            tile.objects()
                .find(|entity| entity.id == id)
                .map(|entity| (tile.position(), entity))
        })
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
