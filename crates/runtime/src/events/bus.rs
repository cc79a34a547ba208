//! Topic-based event bus implementation.

use frog_core::GameEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Level lifecycle and move budget
    Session,
    /// Tongue paths and fed frogs
    Tongue,
    /// Board mutations
    Board,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Session, Topic::Tongue, Topic::Board];

    /// Topic a core event is routed to.
    pub fn of(event: &GameEvent) -> Self {
        match event {
            GameEvent::LevelStarted { .. }
            | GameEvent::MovesChanged { .. }
            | GameEvent::LevelComplete
            | GameEvent::LevelFailed => Topic::Session,
            GameEvent::TonguePathComputed { .. } | GameEvent::FrogFed { .. } => Topic::Tongue,
            GameEvent::TileTopmostRemoved { .. } => Topic::Board,
        }
    }
}

/// Core event stamped with its position in the runtime-wide timeline.
///
/// Sequence numbers are shared across topics, so consumers that merge several
/// subscriptions can restore publication order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub sequence: u64,
    pub payload: GameEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        Topic::of(&self.payload)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
#[derive(Clone)]
pub struct EventBus {
    session: broadcast::Sender<Event>,
    tongue: broadcast::Sender<Event>,
    board: broadcast::Sender<Event>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            session: broadcast::channel(capacity).0,
            tongue: broadcast::channel(capacity).0,
            board: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Session => &self.session,
            Topic::Tongue => &self.tongue,
            Topic::Board => &self.board,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers in the order the topics were requested.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
