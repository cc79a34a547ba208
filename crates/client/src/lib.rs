//! Headless terminal driver for the frog tongue puzzle.
//!
//! The binary reads line commands, forwards them to [`frog_runtime::Runtime`]
//! and prints the board and the events it publishes. Nothing here owns game
//! rules; the client only consumes runtime events.
pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{EventFormat, Session};
