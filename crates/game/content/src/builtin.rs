//! Starter levels bundled with the crate.

use frog_core::LevelLayout;

use crate::loaders::{LevelLoader, LoadResult};

const LEVELS: [(&str, &str); 3] = [
    ("Level_1", include_str!("../levels/Level_1.ron")),
    ("Level_2", include_str!("../levels/Level_2.ron")),
    ("Level_3", include_str!("../levels/Level_3.ron")),
];

pub const BUILTIN_LEVEL_COUNT: usize = LEVELS.len();

/// Parses the bundled level at `index` (zero based).
pub fn builtin_level(index: usize) -> LoadResult<LevelLayout> {
    let Some((name, source)) = LEVELS.get(index) else {
        anyhow::bail!(
            "no builtin level {} (have {})",
            index,
            BUILTIN_LEVEL_COUNT
        );
    };

    LevelLoader::parse(source).map_err(|e| e.context(format!("builtin level {name}")))
}

/// Parses every bundled level in play order.
pub fn builtin_levels() -> LoadResult<Vec<LevelLayout>> {
    (0..BUILTIN_LEVEL_COUNT).map(builtin_level).collect()
}
