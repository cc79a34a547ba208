//! Data-driven level content and loaders.
//!
//! This crate houses static puzzle content and provides loaders for RON/TOML data files:
//! - Level layouts (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//! - The bundled starter levels
//!
//! Loaders produce frog-core types; building a board from a layout stays in the core.

#[cfg(feature = "loaders")]
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use builtin::{BUILTIN_LEVEL_COUNT, builtin_level, builtin_levels};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentError, LevelLoader, LoadResult};
