//! Plain-text board and event rendering.

use std::fmt::Write as _;

use frog_core::{Color, Direction, Entity, EntityKind, GameEvent, Position, TileRegistry};
use frog_runtime::Runtime;

const CELL_WIDTH: usize = 4;

fn initial(text: &str) -> char {
    text.chars().next().unwrap_or('?')
}

fn direction_initial(direction: Direction) -> char {
    initial(direction.as_ref())
}

fn color_initial(color: Color) -> char {
    initial(color.as_ref()).to_ascii_lowercase()
}

/// Label of one tile: `.` when empty, else kind, facing and color initials.
///
/// Fed frogs are drawn in lowercase (`fUg`).
pub fn label(topmost: Option<&Entity>) -> String {
    let Some(entity) = topmost else {
        return ".".to_owned();
    };

    let color = color_initial(entity.color);
    match entity.kind {
        EntityKind::Frog { facing, fed } => {
            let kind = if fed { 'f' } else { 'F' };
            format!("{kind}{}{color}", direction_initial(facing))
        }
        EntityKind::Arrow { facing } => format!("A{}{color}", direction_initial(facing)),
        EntityKind::Grape => format!("G{color}"),
        EntityKind::Cell => "#".to_owned(),
    }
}

/// Draws the board with `y` growing upwards, so `Up` points up on screen.
pub fn render_board(board: &TileRegistry) -> String {
    let dimensions = board.dimensions();
    let mut out = String::new();

    for y in (0..dimensions.height as i32).rev() {
        let _ = write!(out, "{y:>2} ");
        for x in 0..dimensions.width as i32 {
            let position = Position::new(x, y);
            let cell = match board.tile_at(position) {
                Some(tile) => label(tile.topmost()),
                None => " ".to_owned(),
            };
            let _ = write!(out, "{cell:<width$}", width = CELL_WIDTH);
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out.push_str("   ");
    for x in 0..dimensions.width {
        let _ = write!(out, "{x:<width$}", width = CELL_WIDTH);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// One-line summary of the current level and session.
pub fn render_status(runtime: &Runtime) -> String {
    let name = runtime
        .current_level()
        .map_or("<none>", |level| level.name.as_str());
    let session = &runtime.state().session;
    format!(
        "level {name}: {} | moves {}/{}",
        session.phase().as_str(),
        session.current_moves(),
        session.max_moves()
    )
}

pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::LevelStarted { name, max_moves } => {
            format!("level {name} started with {max_moves} moves")
        }
        GameEvent::MovesChanged { remaining } => format!("moves left: {remaining}"),
        GameEvent::TonguePathComputed { frog, path } => {
            let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
            format!("frog {frog} tongue: {}", steps.join(" -> "))
        }
        GameEvent::TileTopmostRemoved { position } => format!("grape eaten at {position}"),
        GameEvent::FrogFed { frog } => format!("frog {frog} is fed"),
        GameEvent::LevelComplete => "level complete!".to_owned(),
        GameEvent::LevelFailed => "level failed: out of moves".to_owned(),
    }
}
