use crate::event::GameEvent;
use crate::session::SessionPhase;
use crate::state::GameState;
use crate::tongue::{CommitReport, commit_path};

use super::{ActionTransition, CommitError, PendingTongue};

/// Result of committing a tongue: board changes plus the events they raised.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitOutcome {
    pub report: CommitReport,
    /// Events in emission order: removals, feeding, move count, terminal phase.
    pub events: Vec<GameEvent>,
    pub phase: SessionPhase,
    pub remaining_moves: u32,
}

/// Applies a [`PendingTongue`] once its playback has finished.
///
/// Every commit costs exactly one move, whether or not the frog was fed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitTongueAction {
    pending: PendingTongue,
}

impl CommitTongueAction {
    pub fn new(pending: PendingTongue) -> Self {
        Self { pending }
    }

    pub fn pending(&self) -> &PendingTongue {
        &self.pending
    }
}

impl ActionTransition for CommitTongueAction {
    type Error = CommitError;
    type Result = CommitOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let phase = state.session.phase();
        if phase != SessionPhase::Active {
            return Err(CommitError::SessionInactive { phase });
        }

        let frog = self.pending.frog();
        let position = self.pending.origin();
        let in_place = state
            .board
            .topmost_at(position)
            .is_some_and(|entity| entity.id == frog && entity.is_hungry_frog());
        if !in_place {
            return Err(CommitError::FrogMissing { frog, position });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let frog = self.pending.frog();
        let report = commit_path(&mut state.board, frog, self.pending.path());

        let mut events: Vec<GameEvent> = report
            .eaten
            .iter()
            .map(|&position| GameEvent::TileTopmostRemoved { position })
            .collect();
        if let Some(fed) = report.fed {
            events.push(GameEvent::FrogFed { frog: fed });
        }

        let census = state.board.census();
        events.extend(state.session.consume_move(census));
        if let Some(event) = state.session.check_win_condition(census) {
            events.push(event);
        }

        Ok(CommitOutcome {
            report,
            events,
            phase: state.session.phase(),
            remaining_moves: state.session.current_moves(),
        })
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let frog = self.pending.frog();
        let Some((_, entity)) = state.board.find_entity(frog) else {
            return Err(CommitError::FrogMissing {
                frog,
                position: self.pending.origin(),
            });
        };

        // A completed level implies every frog, this one included, is fed.
        if state.session.phase() == SessionPhase::Complete && entity.is_hungry_frog() {
            return Err(CommitError::FeedDesync { frog });
        }

        Ok(())
    }
}
