//! Level lifecycle and the tongue execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Both
//! tongue phases run through the same three-phase transition driver, and the
//! engine surfaces rich error information for the runtime.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{CommitOutcome, CommitTongueAction, FireTongueAction, PendingTongue};
use crate::event::GameEvent;
use crate::level::{LevelError, LevelLayout};
use crate::state::{GameState, Position};

use transition::drive_transition;

/// Game engine that owns no data of its own and mutates the borrowed state.
///
/// A tongue is fired in two steps so a renderer can play the path before the
/// board changes:
/// 1. [`GameEngine::prepare_tongue`] validates the trigger and resolves the path
/// 2. [`GameEngine::commit`] eats, spends the move and checks win/lose
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Builds `layout` into a fresh board and starts its session.
    ///
    /// On error the previous board and session are left untouched.
    pub fn load_level(&mut self, layout: &LevelLayout) -> Result<Vec<GameEvent>, LevelError> {
        let board = layout.build(&self.state.config)?;
        self.state.replace_board(board);

        let max_moves = layout.max_moves_or(&self.state.config);
        let mut events = vec![GameEvent::LevelStarted {
            name: layout.name.clone(),
            max_moves,
        }];
        events.extend(self.start_level(max_moves));
        Ok(events)
    }

    /// (Re)starts the session on the current board.
    pub fn start_level(&mut self, max_moves: u32) -> Vec<GameEvent> {
        vec![self.state.session.start_level(max_moves)]
    }

    /// Validates a trigger on the frog at `frog_position` and resolves its path.
    ///
    /// Reads only: a rejected trigger costs no move and leaves the board as is.
    pub fn prepare_tongue(&mut self, frog_position: Position) -> Result<PendingTongue, ExecuteError> {
        let action = FireTongueAction::new(frog_position);
        let pending = drive_transition(&action, self.state).map_err(ExecuteError::Fire)?;

        tracing::debug!(
            "frog {} at {} resolved a {}-tile tongue ({:?})",
            pending.frog(),
            frog_position,
            pending.path().len(),
            pending.path().termination()
        );
        Ok(pending)
    }

    /// Commits a prepared tongue after its playback has finished.
    pub fn commit(&mut self, pending: PendingTongue) -> Result<CommitOutcome, ExecuteError> {
        let action = CommitTongueAction::new(pending);
        drive_transition(&action, self.state).map_err(ExecuteError::Commit)
    }
}
