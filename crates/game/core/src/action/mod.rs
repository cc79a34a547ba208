//! Player-facing actions and the transition trait they implement.
//!
//! A tongue-fire is two actions run through the same pipeline:
//! - [`FireTongueAction`] validates the trigger and resolves the path (read only)
//! - [`CommitTongueAction`] applies the result once playback is over
//!
//! Keeping them separate gives the runtime a single, explicit commit point.

mod commit;
mod error;
mod fire;

pub use commit::{CommitOutcome, CommitTongueAction};
pub use error::{CommitError, TriggerError};
pub use fire::{FireTongueAction, PendingTongue};

use crate::error::GameError;
use crate::state::GameState;

/// Defines how a concrete action validates and mutates game state.
pub trait ActionTransition {
    type Error: GameError;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}
