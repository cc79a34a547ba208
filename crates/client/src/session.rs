//! Interactive command loop over a [`Runtime`].

use std::io::{BufRead, Write};

use anyhow::Result;
use frog_core::SessionPhase;
use frog_runtime::{Event, Runtime, Topic};
use tokio::sync::broadcast::Receiver;

use crate::command::{Command, HELP};
use crate::render::{describe, render_board, render_status};

/// How published events are written to the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Drives a runtime from line commands and echoes its events.
pub struct Session {
    runtime: Runtime,
    receivers: Vec<(Topic, Receiver<Event>)>,
    format: EventFormat,
}

impl Session {
    /// Subscribes to every topic before anything is published.
    pub fn new(runtime: Runtime, format: EventFormat) -> Self {
        let receivers = runtime.event_bus().subscribe_multiple(&Topic::ALL);
        Self {
            runtime,
            receivers,
            format,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        self.flush_events(&mut output)?;
        self.show(&mut output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(error) => writeln!(output, "error: {error}")?,
            }
        }

        Ok(())
    }

    /// Applies one command and writes its events and the resulting board.
    pub fn execute(&mut self, command: Command, output: &mut impl Write) -> Result<()> {
        let result = match command {
            Command::Fire(position) => self.runtime.fire(position).map(|_| ()),
            Command::Restart => self.runtime.restart_level(),
            Command::Next => self.runtime.next_level(),
            Command::Show => return self.show(output),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        self.flush_events(output)?;
        match result {
            Ok(()) => self.show(output)?,
            Err(error) => {
                tracing::debug!("command {:?} rejected: {}", command, error);
                writeln!(output, "error: {error}")?;
            }
        }

        if self.runtime.phase() == SessionPhase::Complete {
            writeln!(output, "type 'next' for the next level or 'restart' to replay")?;
        } else if self.runtime.phase() == SessionPhase::Failed {
            writeln!(output, "type 'restart' to try again")?;
        }
        Ok(())
    }

    fn show(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output, "{}", render_status(&self.runtime))?;
        write!(output, "{}", render_board(&self.runtime.state().board))?;
        Ok(())
    }

    /// Writes every pending event in publication order.
    fn flush_events(&mut self, output: &mut impl Write) -> Result<()> {
        let mut events = Vec::new();
        for (topic, receiver) in &mut self.receivers {
            loop {
                match receiver.try_recv() {
                    Ok(event) => events.push(event),
                    Err(tokio::sync::broadcast::error::TryRecvError::Lagged(skipped)) => {
                        tracing::warn!("dropped {} {:?} events", skipped, topic);
                    }
                    Err(_) => break,
                }
            }
        }
        events.sort_by_key(|event| event.sequence);

        for event in events {
            match self.format {
                EventFormat::Text => writeln!(output, "> {}", describe(&event.payload))?,
                EventFormat::Json => writeln!(output, "{}", serde_json::to_string(&event)?)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use frog_core::{Color, Direction, LevelLayout, ObjectEntry, ObjectKind, TileEntry};
    use frog_runtime::RuntimeConfig;

    use super::*;

    fn layout() -> LevelLayout {
        LevelLayout::new("line")
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

    fn run(format: EventFormat, script: &str) -> String {
        let mut session = Session::new(Runtime::new(RuntimeConfig::default()), format);
        session.runtime_mut().load_level(layout()).unwrap();

        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_a_level_to_completion() {
        let text = run(EventFormat::Text, "fire 0 0\nquit\nfire 0 0\n");

        assert!(text.contains("> level line started with 2 moves"));
        assert!(text.contains("> grape eaten at (2, 0)"));
        assert!(text.contains("> level complete!"));
        assert!(text.contains("level line: complete | moves 1/2"));
        assert_eq!(text.matches("frog #1 tongue").count(), 1);
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let text = run(EventFormat::Text, "jump\nfire 2 0\nshow\n");

        assert!(text.contains("error: unknown command 'jump'"));
        assert!(text.contains("error: fire action failed"));
        assert!(text.contains("moves 2/2"));
    }

    #[test]
    fn json_events_are_one_per_line() {
        let text = run(EventFormat::Json, "fire 0 0\n");

        let events: Vec<Event> = text
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(events.first().map(|e| e.sequence), Some(0));
        assert!(events.windows(2).all(|pair| pair[0].sequence < pair[1].sequence));
        assert!(events.iter().any(|e| e.topic() == Topic::Board));
    }
}
