//! Line commands accepted on stdin.

use std::str::FromStr;

use frog_core::Position;

pub const HELP: &str = "commands: fire <x> <y> | show | restart | next | help | quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Trigger the frog at a tile and commit its tongue right away.
    Fire(Position),
    Show,
    Restart,
    Next,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: fire <x> <y>")]
    FireUsage,

    #[error("'{0}' is not a coordinate")]
    BadCoordinate(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "fire" | "f" => {
                let x = coordinate(words.next())?;
                let y = coordinate(words.next())?;
                Command::Fire(Position::new(x, y))
            }
            "show" | "s" => Command::Show,
            "restart" | "r" => Command::Restart,
            "next" | "n" => Command::Next,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb)),
        };

        if words.next().is_some() {
            return match command {
                Command::Fire(_) => Err(CommandError::FireUsage),
                _ => Err(CommandError::Unknown(line.trim().to_owned())),
            };
        }
        Ok(command)
    }
}

fn coordinate(word: Option<&str>) -> Result<i32, CommandError> {
    let word = word.ok_or(CommandError::FireUsage)?;
    word.parse()
        .map_err(|_| CommandError::BadCoordinate(word.to_owned()))
}
