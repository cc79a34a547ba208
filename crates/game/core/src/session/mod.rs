//! Move budget and win/lose bookkeeping for one level.
//!
//! The session never looks at the board directly. Callers hand it a
//! [`FrogCensus`] taken from the registry, which keeps the state machine pure
//! and lets it be driven in isolation.

use crate::event::GameEvent;

/// Aggregate frog population as seen by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrogCensus {
    /// Frogs placed on the board for this level, fed or not.
    pub registered: usize,
    /// Frogs that have not been fed yet.
    pub hungry: usize,
}

impl FrogCensus {
    pub fn all_fed(&self) -> bool {
        self.hungry == 0
    }
}

/// Lifecycle of a level session.
///
/// `Complete` and `Failed` are terminal and mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    #[default]
    Inactive,
    Active,
    Complete,
    Failed,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Inactive => "inactive",
            SessionPhase::Active => "active",
            SessionPhase::Complete => "complete",
            SessionPhase::Failed => "failed",
        }
    }
}

/// Move counter plus the session phase.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    phase: SessionPhase,
    max_moves: u32,
    current_moves: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn current_moves(&self) -> u32 {
        self.current_moves
    }

    /// Enters `Active` from any phase with a fresh move budget.
    pub fn start_level(&mut self, max_moves: u32) -> GameEvent {
        self.phase = SessionPhase::Active;
        self.max_moves = max_moves;
        self.current_moves = max_moves;
        tracing::info!("level started with {} moves", max_moves);
        GameEvent::MovesChanged {
            remaining: max_moves,
        }
    }

    /// True while a frog may still be triggered.
    pub fn can_move(&self) -> bool {
        self.is_active() && self.current_moves > 0
    }

    /// Spends one move. At zero moves, any hungry frog fails the level.
    ///
    /// Does nothing outside `Active`.
    pub fn consume_move(&mut self, census: FrogCensus) -> Vec<GameEvent> {
        if !self.is_active() {
            return Vec::new();
        }

        self.current_moves = self.current_moves.saturating_sub(1);
        let mut events = vec![GameEvent::MovesChanged {
            remaining: self.current_moves,
        }];

        if self.current_moves == 0 && !census.all_fed() {
            self.phase = SessionPhase::Failed;
            tracing::info!("level failed: out of moves with {} hungry frogs", census.hungry);
            events.push(GameEvent::LevelFailed);
        }

        events
    }

    /// Completes the level once every registered frog is fed.
    ///
    /// A board that never had a frog does not count as won.
    pub fn check_win_condition(&mut self, census: FrogCensus) -> Option<GameEvent> {
        if !self.is_active() || census.registered == 0 || !census.all_fed() {
            return None;
        }

        self.phase = SessionPhase::Complete;
        tracing::info!(
            "level complete with {} of {} moves left",
            self.current_moves,
            self.max_moves
        );
        Some(GameEvent::LevelComplete)
    }
}
