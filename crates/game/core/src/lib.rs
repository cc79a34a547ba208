//! Deterministic rules of the frog tongue puzzle.
//!
//! `frog-core` defines the canonical rules (board, tongue resolution, move
//! budget, engine) and exposes pure APIs that can be reused by the runtime,
//! content tooling and tests. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod level;
pub mod session;
pub mod state;
pub mod tongue;

pub use action::{
    ActionTransition, CommitError, CommitOutcome, CommitTongueAction, FireTongueAction,
    PendingTongue, TriggerError,
};
pub use config::{GameConfig, GridDimensions};
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use level::{LevelError, LevelLayout, ObjectEntry, ObjectKind, TileEntry};
pub use session::{FrogCensus, SessionPhase, SessionState};
pub use state::{
    Color, Direction, Entity, EntityId, EntityKind, GameState, Position, Tile, TileError,
    TileRegistry,
};
pub use tongue::{
    CommitReport, Interaction, Termination, TonguePath, TongueStep, Verdict, compute_path,
    commit_path, resolve,
};
