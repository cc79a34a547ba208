//! Plain data types making up the board state.
mod common;
mod entity;
mod tile;

pub use common::{Color, Direction, EntityId, Position};
pub use entity::{Entity, EntityKind};
pub use tile::{Tile, TileError};
