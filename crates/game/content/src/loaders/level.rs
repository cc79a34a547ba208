//! Level layout loader.
//!
//! Level files list only the tiles that hold objects. Object types are plain
//! strings so files written by external tools stay readable; they are resolved
//! against [`ObjectKind`] here and an unknown name aborts the whole load.

use std::path::Path;
use std::str::FromStr;

use frog_core::{Color, Direction, LevelLayout, ObjectEntry, ObjectKind, Position, TileEntry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Configuration problems detected while resolving a level file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("level '{level}': unresolved object type '{name}' at {position}")]
    UnresolvedObjectType {
        level: String,
        position: Position,
        name: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRon {
    name: String,
    #[serde(default)]
    max_moves: Option<u32>,
    #[serde(default)]
    tiles: Vec<TileRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileRon {
    x: i32,
    y: i32,
    #[serde(default)]
    objects: Vec<ObjectRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectRon {
    #[serde(rename = "type")]
    kind: String,
    color: Color,
    #[serde(default = "default_direction")]
    direction: Direction,
    #[serde(default)]
    stack_height: f32,
}

fn default_direction() -> Direction {
    Direction::Up
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| e.context(format!("Failed to load level {}", path.display())))
    }

    /// Parse a level layout from RON text.
    pub fn parse(content: &str) -> LoadResult<LevelLayout> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let mut layout = LevelLayout::new(data.name);
        layout.max_moves = data.max_moves;
        for tile in data.tiles {
            let position = Position::new(tile.x, tile.y);
            let objects = tile
                .objects
                .into_iter()
                .map(|object| resolve_object(&layout.name, position, object))
                .collect::<Result<Vec<_>, _>>()?;
            layout.tiles.push(TileEntry::new(tile.x, tile.y, objects));
        }

        tracing::debug!(
            "parsed level '{}' with {} tile entries",
            layout.name,
            layout.tiles.len()
        );
        Ok(layout)
    }

    /// Render a layout back to RON using string object types.
    pub fn to_ron(layout: &LevelLayout) -> LoadResult<String> {
        let data = LevelRon {
            name: layout.name.clone(),
            max_moves: layout.max_moves,
            tiles: layout
                .tiles
                .iter()
                .map(|tile| TileRon {
                    x: tile.x,
                    y: tile.y,
                    objects: tile
                        .objects
                        .iter()
                        .map(|object| ObjectRon {
                            kind: object.kind.to_string(),
                            color: object.color,
                            direction: object.direction,
                            stack_height: object.stack_height,
                        })
                        .collect(),
                })
                .collect(),
        };

        ron::ser::to_string_pretty(&data, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize level RON: {}", e))
    }
}

fn resolve_object(level: &str, position: Position, object: ObjectRon) -> Result<ObjectEntry, ContentError> {
    let kind = ObjectKind::from_str(&object.kind).map_err(|_| {
        tracing::error!("level '{}': unknown object type '{}'", level, object.kind);
        ContentError::UnresolvedObjectType {
            level: level.to_owned(),
            position,
            name: object.kind.clone(),
        }
    })?;

    Ok(ObjectEntry {
        kind,
        color: object.color,
        direction: object.direction,
        stack_height: object.stack_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: &str = r#"(
        name: "turn",
        max_moves: Some(2),
        tiles: [
            (x: 0, y: 0, objects: [(type: "Frog", color: Blue, direction: Right)]),
            (x: 2, y: 0, objects: [(type: "arrow", color: Blue, direction: Up, stack_height: 0.5)]),
            (x: 2, y: 2, objects: [(type: "Grape", color: Blue)]),
        ],
    )"#;

    #[test]
    fn parses_string_object_types() {
        let layout = LevelLoader::parse(TURN).unwrap();

        assert_eq!(layout.name, "turn");
        assert_eq!(layout.max_moves, Some(2));
        assert_eq!(layout.tiles.len(), 3);

        let arrow = layout.tiles[1].objects[0];
        assert_eq!(arrow.kind, ObjectKind::Arrow);
        assert_eq!(arrow.direction, Direction::Up);
        assert_eq!(arrow.stack_height, 0.5);

        let grape = layout.tiles[2].objects[0];
        assert_eq!(grape.kind, ObjectKind::Grape);
        assert_eq!(grape.direction, Direction::Up);
    }

    #[test]
    fn unknown_object_type_aborts_the_load() {
        let content = r#"(
            name: "broken",
            tiles: [(x: 1, y: 1, objects: [(type: "Lily", color: Red)])],
        )"#;

        let err = LevelLoader::parse(content).unwrap_err();
        let cause = err.downcast_ref::<ContentError>().unwrap();

        assert_eq!(
            cause,
            &ContentError::UnresolvedObjectType {
                level: "broken".to_owned(),
                position: Position::new(1, 1),
                name: "Lily".to_owned(),
            }
        );
    }

    #[test]
    fn cells_cannot_be_listed() {
        let content = r#"(name: "cell", tiles: [(x: 0, y: 0, objects: [(type: "Cell", color: Red)])])"#;
        let err = LevelLoader::parse(content).unwrap_err();
        assert!(err.downcast_ref::<ContentError>().is_some());
    }

    #[test]
    fn ron_output_parses_back() {
        let layout = LevelLoader::parse(TURN).unwrap();
        let text = LevelLoader::to_ron(&layout).unwrap();

        assert_eq!(LevelLoader::parse(&text).unwrap(), layout);
    }

    #[test]
    fn load_reports_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.ron");
        std::fs::write(&path, "not ron").unwrap();

        let err = LevelLoader::load(&path).unwrap_err();

        assert!(format!("{err:#}").contains("bad.ron"));
    }
}
