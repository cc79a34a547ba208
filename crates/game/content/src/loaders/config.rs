//! Game configuration loader.

use std::path::Path;

use frog_core::{GameConfig, GridDimensions};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file yields
    /// [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.grid.area() == 0 {
            anyhow::bail!(
                "grid must have at least one tile (got {}x{})",
                config.grid.width,
                config.grid.height
            );
        }
        if !config.grid.is_playable() {
            anyhow::bail!(
                "grid sides must not exceed {} tiles (got {}x{})",
                GridDimensions::MAX_SIDE,
                config.grid.width,
                config.grid.height
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("max_path_steps = 12\n").unwrap();

        assert_eq!(config.max_path_steps, 12);
        assert_eq!(config.grid, GameConfig::new().grid);
        assert_eq!(config.default_max_moves, GameConfig::DEFAULT_MAX_MOVES);
    }

    #[test]
    fn loads_grid_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nwidth = 8\nheight = 4").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.grid.width, 8);
        assert_eq!(config.grid.height, 4);
    }

    #[test]
    fn rejects_empty_grid() {
        let err = ConfigLoader::parse("[grid]\nwidth = 0\nheight = 6").unwrap_err();
        assert!(err.to_string().contains("at least one tile"));
    }

    #[test]
    fn rejects_oversized_grid() {
        let err = ConfigLoader::parse("[grid]\nwidth = 4000000000\nheight = 6").unwrap_err();
        assert!(err.to_string().contains("must not exceed"));

        let err = ConfigLoader::parse("[grid]\nwidth = 6\nheight = 1025").unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
