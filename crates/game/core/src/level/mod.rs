//! Logical level layout and the board builder.
//!
//! A layout only lists the tiles that hold something; every other coordinate
//! inside the grid becomes an empty tile. Parsing layouts from files lives in
//! the content crate.
mod error;

pub use error::LevelError;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry as MapEntry;

use crate::config::GameConfig;
use crate::state::{Color, Direction, Entity, EntityId, EntityKind, Position, Tile, TileRegistry};

/// Placeable object kinds. Cells are implicit and cannot be listed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ObjectKind {
    Frog,
    Grape,
    Arrow,
}

/// One object stacked on a tile, bottom first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectEntry {
    pub kind: ObjectKind,
    pub color: Color,
    /// Ignored for grapes.
    pub direction: Direction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stack_height: f32,
}

impl ObjectEntry {
    pub fn new(kind: ObjectKind, color: Color, direction: Direction) -> Self {
        Self {
            kind,
            color,
            direction,
            stack_height: 0.0,
        }
    }

    fn to_entity(self, id: EntityId) -> Entity {
        let kind = match self.kind {
            ObjectKind::Frog => EntityKind::Frog {
                facing: self.direction,
                fed: false,
            },
            ObjectKind::Grape => EntityKind::Grape,
            ObjectKind::Arrow => EntityKind::Arrow {
                facing: self.direction,
            },
        };
        Entity::new(id, self.color, kind).with_stack_height(self.stack_height)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileEntry {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<ObjectEntry>,
}

impl TileEntry {
    pub fn new(x: i32, y: i32, objects: Vec<ObjectEntry>) -> Self {
        Self { x, y, objects }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Static description of a level.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelLayout {
    pub name: String,
    /// Falls back to [`GameConfig::default_max_moves`] when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_moves: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiles: Vec<TileEntry>,
}

impl LevelLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    #[must_use]
    pub fn with_tile(mut self, entry: TileEntry) -> Self {
        self.tiles.push(entry);
        self
    }

    pub fn max_moves_or(&self, config: &GameConfig) -> u32 {
        self.max_moves.unwrap_or(config.default_max_moves)
    }

    /// Builds the initial board: one tile per coordinate of the grid.
    ///
    /// Entries outside the grid abort the build. A repeated coordinate keeps
    /// its first entry.
    pub fn build(&self, config: &GameConfig) -> Result<TileRegistry, LevelError> {
        let dimensions = config.grid;

        let mut entries: BTreeMap<Position, &TileEntry> = BTreeMap::new();
        for entry in &self.tiles {
            let position = entry.position();
            if !dimensions.contains(position) {
                return Err(LevelError::OutOfBounds {
                    position,
                    dimensions,
                });
            }
            match entries.entry(position) {
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                }
                MapEntry::Occupied(_) => {
                    tracing::warn!("level '{}' lists {} twice; keeping the first", self.name, position);
                }
            }
        }

        let mut registry = TileRegistry::new(dimensions);
        for position in dimensions.positions() {
            let cell = registry.allocate_entity_id();
            let mut tile = Tile::new(position, cell);
            if let Some(entry) = entries.get(&position) {
                for object in &entry.objects {
                    let id = registry.allocate_entity_id();
                    tile.push(object.to_entity(id))?;
                }
            }
            registry.register_tile(tile);
        }

        tracing::debug!(
            "level '{}' built with {} tiles and {} frogs",
            self.name,
            registry.len(),
            registry.census().registered
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileError;

    fn frog(color: Color, direction: Direction) -> ObjectEntry {
        ObjectEntry::new(ObjectKind::Frog, color, direction)
    }

    fn grape(color: Color) -> ObjectEntry {
        ObjectEntry::new(ObjectKind::Grape, color, Direction::Up)
    }

    #[test]
    fn fills_every_coordinate() {
        let config = GameConfig::with_grid(3, 2);
        let layout = LevelLayout::new("blank");

        let registry = layout.build(&config).unwrap();

        assert_eq!(registry.len(), 6);
        assert!(registry.tiles().all(Tile::is_empty));
    }

    #[test]
    fn stacks_objects_bottom_first() {
        let config = GameConfig::new();
        let layout = LevelLayout::new("stack").with_tile(TileEntry::new(
            2,
            3,
            vec![grape(Color::Blue), frog(Color::Red, Direction::Left)],
        ));

        let registry = layout.build(&config).unwrap();
        let tile = registry.tile_at(Position::new(2, 3)).unwrap();

        assert_eq!(tile.len(), 2);
        let top = tile.topmost().unwrap();
        assert_eq!(
            top.kind,
            EntityKind::Frog {
                facing: Direction::Left,
                fed: false
            }
        );
        assert_eq!(registry.census().registered, 1);
    }

    #[test]
    fn rejects_entries_outside_the_grid() {
        let config = GameConfig::with_grid(2, 2);
        let layout = LevelLayout::new("wide").with_tile(TileEntry::new(2, 0, vec![grape(Color::Red)]));

        let err = layout.build(&config).unwrap_err();

        assert!(matches!(err, LevelError::OutOfBounds { position, .. } if position == Position::new(2, 0)));
    }

    #[test]
    fn first_duplicate_entry_wins() {
        let config = GameConfig::with_grid(2, 2);
        let layout = LevelLayout::new("dup")
            .with_tile(TileEntry::new(0, 0, vec![grape(Color::Red)]))
            .with_tile(TileEntry::new(0, 0, vec![grape(Color::Blue), grape(Color::Blue)]));

        let registry = layout.build(&config).unwrap();
        let tile = registry.tile_at(Position::ORIGIN).unwrap();

        assert_eq!(tile.len(), 1);
        assert_eq!(tile.topmost().unwrap().color, Color::Red);
    }

    #[test]
    fn overfull_stack_is_an_error() {
        let config = GameConfig::new();
        let objects = vec![grape(Color::Green); GameConfig::MAX_OBJECTS_PER_TILE + 1];
        let layout = LevelLayout::new("tower").with_tile(TileEntry::new(0, 0, objects));

        let err = layout.build(&config).unwrap_err();

        assert!(matches!(err, LevelError::StackOverflow(TileError::StackFull { .. })));
    }

    #[test]
    fn max_moves_falls_back_to_config() {
        let config = GameConfig::new();
        assert_eq!(LevelLayout::new("a").max_moves_or(&config), GameConfig::DEFAULT_MAX_MOVES);
        assert_eq!(LevelLayout::new("b").with_max_moves(3).max_moves_or(&config), 3);
    }
}
