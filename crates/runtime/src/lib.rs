//! Runtime orchestration for the frog tongue puzzle.
//!
//! This crate wires the deterministic core to its consumers. [`Runtime`] owns
//! the simulation context, serializes tongue fires (one in flight at a time)
//! and republishes every core event on a topic-based [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and its configuration
//! - [`api`] exposes the error types downstream clients handle
//! - [`events`] provides the topic-based event bus
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Runtime, RuntimeConfig};
