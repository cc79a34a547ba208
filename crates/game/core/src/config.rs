use crate::state::Position;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Board bounds. Every coordinate inside is backed by a registered tile.
    pub grid: GridDimensions,

    /// Safety bound on the number of steps a single tongue may take.
    ///
    /// Arrow cycles would otherwise loop forever; reaching the cap ends the
    /// path without an error.
    pub max_path_steps: u32,

    /// Move budget used when a level does not declare its own.
    pub default_max_moves: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of objects stacked on a single tile (ground cell excluded).
    pub const MAX_OBJECTS_PER_TILE: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_WIDTH: u32 = 6;
    pub const DEFAULT_GRID_HEIGHT: u32 = 6;
    pub const DEFAULT_MAX_PATH_STEPS: u32 = 100;
    pub const DEFAULT_MAX_MOVES: u32 = 10;

    pub fn new() -> Self {
        Self {
            grid: GridDimensions::new(Self::DEFAULT_GRID_WIDTH, Self::DEFAULT_GRID_HEIGHT),
            max_path_steps: Self::DEFAULT_MAX_PATH_STEPS,
            default_max_moves: Self::DEFAULT_MAX_MOVES,
        }
    }

    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            grid: GridDimensions::new(width, height),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Width and height of the board in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    /// Largest accepted width or height. Coordinates are `i32` and every
    /// coordinate gets a tile, so sides are kept well below both limits.
    pub const MAX_SIDE: u32 = 1024;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn side_in_range(side: u32) -> bool {
        side >= 1 && side <= Self::MAX_SIDE
    }

    /// Both sides are non-zero and at most [`Self::MAX_SIDE`].
    pub const fn is_playable(&self) -> bool {
        Self::side_in_range(self.width) && Self::side_in_range(self.height)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Iterates every coordinate row by row, starting at the origin.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_GRID_WIDTH,
            GameConfig::DEFAULT_GRID_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_six_by_six_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid, GridDimensions::new(6, 6));
        assert_eq!(config.max_path_steps, 100);
    }

    #[test]
    fn contains_rejects_negative_and_overflowing_coordinates() {
        let grid = GridDimensions::new(3, 2);
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 1)));
        assert!(!grid.contains(Position::new(0, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
    }

    #[test]
    fn playable_grids_are_bounded_on_both_sides() {
        assert!(GridDimensions::default().is_playable());
        assert!(GridDimensions::new(GridDimensions::MAX_SIDE, 1).is_playable());
        assert!(!GridDimensions::new(0, 6).is_playable());
        assert!(!GridDimensions::new(6, GridDimensions::MAX_SIDE + 1).is_playable());
        assert!(!GridDimensions::new(u32::MAX, u32::MAX).is_playable());
    }

    #[test]
    fn positions_cover_the_whole_grid() {
        let grid = GridDimensions::new(4, 3);
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(all.len() as u64, grid.area());
        assert_eq!(all.first(), Some(&Position::new(0, 0)));
        assert_eq!(all.last(), Some(&Position::new(3, 2)));
    }
}
