//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation context and a playlist of levels, guards the
//! single in-flight tongue, and republishes core events on the [`EventBus`].

use std::env;

use frog_core::{
    CommitOutcome, GameConfig, GameEngine, GameEvent, GameState, GridDimensions, LevelLayout,
    PendingTongue, Position, SessionPhase,
};
use tokio::sync::broadcast;

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};

/// Runtime configuration shared across the orchestrator and its event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables (unset or unparsable values keep `base`):
    /// - `FROGS_GRID_WIDTH` / `FROGS_GRID_HEIGHT` - Board size in tiles, from 1
    ///   to [`GridDimensions::MAX_SIDE`]; other values are ignored
    /// - `FROGS_MAX_PATH_STEPS` - Step cap for a single tongue
    /// - `FROGS_EVENT_BUFFER` - Per-topic event channel capacity
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of an existing configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        let grid = self.game_config.grid;
        let width = grid_side("FROGS_GRID_WIDTH", read_env("FROGS_GRID_WIDTH"), grid.width);
        let height = grid_side("FROGS_GRID_HEIGHT", read_env("FROGS_GRID_HEIGHT"), grid.height);
        self.game_config.grid = GridDimensions::new(width, height);

        if let Some(steps) = read_env::<u32>("FROGS_MAX_PATH_STEPS") {
            self.game_config.max_path_steps = steps;
        }
        if let Some(capacity) = read_env::<usize>("FROGS_EVENT_BUFFER") {
            self.event_buffer_size = capacity.max(1);
        }

        self
    }
}

/// Accepts an overridden grid side only when it is in range.
fn grid_side(key: &str, value: Option<u32>, fallback: u32) -> u32 {
    match value {
        Some(side) if GridDimensions::side_in_range(side) => side,
        Some(side) => {
            tracing::warn!(
                "ignoring {}={}: expected 1..={}",
                key,
                side,
                GridDimensions::MAX_SIDE
            );
            fallback
        }
        None => fallback,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that drives one level at a time.
///
/// Firing a frog is two calls: [`Runtime::trigger`] resolves the path and
/// publishes it for playback, [`Runtime::complete_tongue`] commits it once
/// playback is over. Nothing else can be triggered in between.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    playlist: Vec<LevelLayout>,
    current: Option<usize>,
    in_flight: Option<PendingTongue>,
    bus: EventBus,
    sequence: u64,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        let bus = EventBus::with_capacity(config.event_buffer_size);
        let state = GameState::empty(config.game_config.clone());
        Self {
            config,
            state,
            playlist: Vec::new(),
            current: None,
            in_flight: None,
            bus,
            sequence: 0,
        }
    }

    /// Creates a runtime with a playlist; no level is loaded yet.
    pub fn with_levels(config: RuntimeConfig, levels: Vec<LevelLayout>) -> Self {
        let mut runtime = Self::new(config);
        runtime.playlist = levels;
        runtime
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.session.phase()
    }

    pub fn remaining_moves(&self) -> u32 {
        self.state.session.current_moves()
    }

    pub fn current_level(&self) -> Option<&LevelLayout> {
        self.current.and_then(|index| self.playlist.get(index))
    }

    pub fn level_count(&self) -> usize {
        self.playlist.len()
    }

    pub fn in_flight(&self) -> Option<&PendingTongue> {
        self.in_flight.as_ref()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to runtime events on one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Appends `layout` to the playlist and starts it.
    ///
    /// A layout that fails to build is not kept.
    pub fn load_level(&mut self, layout: LevelLayout) -> Result<()> {
        self.playlist.push(layout);
        let index = self.playlist.len() - 1;
        self.start(index).inspect_err(|_| {
            self.playlist.pop();
        })
    }

    /// Starts the playlist entry at `index`.
    pub fn load_index(&mut self, index: usize) -> Result<()> {
        if index >= self.playlist.len() {
            return Err(RuntimeError::NoLevelLoaded);
        }
        self.start(index)
    }

    /// Rebuilds the current level from its layout, dropping any tongue in flight.
    pub fn restart_level(&mut self) -> Result<()> {
        let index = self.current.ok_or(RuntimeError::NoLevelLoaded)?;
        self.start(index)
    }

    /// Advances to the next playlist entry.
    pub fn next_level(&mut self) -> Result<()> {
        let index = self.current.ok_or(RuntimeError::NoLevelLoaded)?;
        let next = index + 1;
        if next >= self.playlist.len() {
            let current = self.playlist[index].name.clone();
            return Err(RuntimeError::NoNextLevel { current });
        }
        self.start(next)
    }

    fn start(&mut self, index: usize) -> Result<()> {
        let layout = self.playlist.get(index).ok_or(RuntimeError::NoLevelLoaded)?;
        let events = GameEngine::new(&mut self.state).load_level(layout)?;

        if let Some(dropped) = self.in_flight.take() {
            tracing::debug!("discarding tongue of frog {} on level start", dropped.frog());
        }
        self.current = Some(index);
        tracing::info!("level {} '{}' loaded", index, layout.name);

        self.publish_all(events);
        Ok(())
    }

    /// Fires the frog on top of `position` and returns the path to animate.
    ///
    /// The board is not modified until [`Runtime::complete_tongue`].
    pub fn trigger(&mut self, position: Position) -> Result<&PendingTongue> {
        if let Some(pending) = &self.in_flight {
            return Err(RuntimeError::TongueInFlight {
                frog: pending.frog(),
            });
        }
        if self.current.is_none() {
            return Err(RuntimeError::NoLevelLoaded);
        }

        let pending = GameEngine::new(&mut self.state)
            .prepare_tongue(position)
            .inspect_err(|error| tracing::debug!("trigger at {} rejected: {}", position, error))?;

        self.publish(pending.path_event());
        Ok(self.in_flight.insert(pending))
    }

    /// Commits the tongue in flight: eats, spends the move, checks win/lose.
    ///
    /// The tongue leaves the in-flight slot whether or not the commit succeeds.
    /// A rejected commit was resolved against a board that no longer holds, so
    /// the error is returned and the next trigger starts from the current board.
    pub fn complete_tongue(&mut self) -> Result<CommitOutcome> {
        let pending = self.in_flight.take().ok_or(RuntimeError::NoTongueInFlight)?;
        let frog = pending.frog();
        let outcome = GameEngine::new(&mut self.state)
            .commit(pending)
            .inspect_err(|error| tracing::warn!("tongue of frog {} discarded: {}", frog, error))?;

        self.publish_all(outcome.events.iter().cloned());
        Ok(outcome)
    }

    /// Trigger and commit in one call, for callers without playback.
    pub fn fire(&mut self, position: Position) -> Result<CommitOutcome> {
        self.trigger(position)?;
        self.complete_tongue()
    }

    fn publish(&mut self, payload: GameEvent) {
        let event = Event {
            sequence: self.sequence,
            payload,
        };
        self.sequence += 1;
        self.bus.publish(event);
    }

    fn publish_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_core_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.game_config, GameConfig::new());
        assert_eq!(config.event_buffer_size, EventBus::DEFAULT_CAPACITY);
    }

    #[test]
    fn grid_overrides_outside_the_accepted_range_are_ignored() {
        assert_eq!(grid_side("W", Some(12), 6), 12);
        assert_eq!(grid_side("W", None, 6), 6);
        assert_eq!(grid_side("W", Some(0), 6), 6);
        assert_eq!(grid_side("W", Some(u32::MAX), 6), 6);
        assert_eq!(grid_side("W", Some(GridDimensions::MAX_SIDE + 1), 6), 6);
    }

    fn single_catch() -> LevelLayout {
        use frog_core::{Color, Direction, ObjectEntry, ObjectKind, TileEntry};

        LevelLayout::new("single")
            .with_max_moves(2)
            .with_tile(TileEntry::new(
                0,
                0,
                vec![ObjectEntry::new(ObjectKind::Frog, Color::Red, Direction::Right)],
            ))
            .with_tile(TileEntry::new(
                2,
                0,
                vec![ObjectEntry::new(ObjectKind::Grape, Color::Red, Direction::Up)],
            ))
    }

    #[test]
    fn rejected_commit_frees_the_in_flight_slot() {
        let mut runtime = Runtime::new(RuntimeConfig::default());
        runtime.load_level(single_catch()).unwrap();
        runtime.trigger(Position::ORIGIN).unwrap();

        // The board the tongue was resolved against is gone.
        runtime.state = GameState::empty(runtime.config.game_config.clone());

        assert!(matches!(
            runtime.complete_tongue(),
            Err(RuntimeError::Execute(_))
        ));
        assert!(runtime.in_flight().is_none());
        assert!(matches!(
            runtime.complete_tongue(),
            Err(RuntimeError::NoTongueInFlight)
        ));

        runtime.restart_level().unwrap();
        assert!(runtime.trigger(Position::ORIGIN).is_ok());
    }

    #[test]
    fn runtime_without_level_refuses_triggers() {
        let mut runtime = Runtime::new(RuntimeConfig::default());

        assert!(matches!(
            runtime.trigger(Position::ORIGIN),
            Err(RuntimeError::NoLevelLoaded)
        ));
        assert!(matches!(
            runtime.restart_level(),
            Err(RuntimeError::NoLevelLoaded)
        ));
        assert_eq!(runtime.phase(), SessionPhase::Inactive);
    }
}
