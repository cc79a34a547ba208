use super::{Color, Direction, EntityId};

/// Variant tag for everything that can sit on the board.
///
/// Behavior is keyed by this tag (see [`crate::tongue::resolve`]) rather than
/// by a type hierarchy, so every rule involving object kinds lives in one
/// exhaustive `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// Ground layer of a tile. Never stacked and never topmost.
    Cell,
    Frog {
        facing: Direction,
        /// A fed frog is deactivated: it stays on its tile but can no longer fire.
        fed: bool,
    },
    Grape,
    Arrow {
        facing: Direction,
    },
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Cell => "cell",
            EntityKind::Frog { .. } => "frog",
            EntityKind::Grape => "grape",
            EntityKind::Arrow { .. } => "arrow",
        }
    }
}

/// A placed object: its identity, color and kind-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub color: Color,
    pub kind: EntityKind,
    /// Vertical offset a renderer uses when stacking; no gameplay meaning.
    pub stack_height: f32,
}

impl Entity {
    pub fn frog(id: EntityId, color: Color, facing: Direction) -> Self {
        Self::new(id, color, EntityKind::Frog { facing, fed: false })
    }

    pub fn grape(id: EntityId, color: Color) -> Self {
        Self::new(id, color, EntityKind::Grape)
    }

    pub fn arrow(id: EntityId, color: Color, facing: Direction) -> Self {
        Self::new(id, color, EntityKind::Arrow { facing })
    }

    pub fn new(id: EntityId, color: Color, kind: EntityKind) -> Self {
        Self {
            id,
            color,
            kind,
            stack_height: 0.0,
        }
    }

    #[must_use]
    pub fn with_stack_height(mut self, stack_height: f32) -> Self {
        self.stack_height = stack_height;
        self
    }

    pub fn is_frog(&self) -> bool {
        matches!(self.kind, EntityKind::Frog { .. })
    }

    pub fn is_hungry_frog(&self) -> bool {
        matches!(self.kind, EntityKind::Frog { fed: false, .. })
    }

    pub fn is_grape_of(&self, color: Color) -> bool {
        matches!(self.kind, EntityKind::Grape) && self.color == color
    }

    pub fn color_matches(&self, other: Color) -> bool {
        self.color == other
    }
}
