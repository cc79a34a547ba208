use crate::state::{Color, Direction, Entity, EntityKind};

/// Decision taken when the tongue reaches a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Empty tile: keep going.
    Continue,
    /// Obstacle, mismatched or unknown object: the tongue halts here.
    Stop,
    /// Matching grape: caught, and the tongue keeps going.
    EatAndContinue,
    /// Matching arrow: keep going in the arrow's facing.
    Turn,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Continue => "continue",
            Verdict::Stop => "stop",
            Verdict::EatAndContinue => "eat_and_continue",
            Verdict::Turn => "turn",
        }
    }
}

/// Verdict plus the direction the tongue travels in afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub verdict: Verdict,
    pub direction: Direction,
}

impl Interaction {
    const fn keep(verdict: Verdict, direction: Direction) -> Self {
        Self { verdict, direction }
    }
}

/// Decides what a tongue of `color`, travelling in `direction`, does with the
/// topmost object of the tile it enters.
///
/// Color-matched grapes and arrows are passable; everything else halts the
/// tongue. Unknown or non-interactable objects fall through to `Stop`.
pub fn resolve(color: Color, direction: Direction, topmost: Option<&Entity>) -> Interaction {
    let Some(entity) = topmost else {
        return Interaction::keep(Verdict::Continue, direction);
    };

    match entity.kind {
        EntityKind::Grape if entity.color_matches(color) => {
            Interaction::keep(Verdict::EatAndContinue, direction)
        }
        EntityKind::Arrow { facing } if entity.color_matches(color) => Interaction {
            verdict: Verdict::Turn,
            direction: facing,
        },
        EntityKind::Grape
        | EntityKind::Arrow { .. }
        | EntityKind::Frog { .. }
        | EntityKind::Cell => Interaction::keep(Verdict::Stop, direction),
    }
}
