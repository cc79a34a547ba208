use crate::state::{Color, Direction, Position, TileRegistry};

use super::interaction::{Verdict, resolve};

/// Why a tongue stopped extending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The next coordinate has no tile.
    Boundary,
    /// A `Stop` verdict; the blocking tile is the last path entry.
    Blocked,
    /// The tongue sits on a matching grape and the next tile is empty; it
    /// rests on that grape.
    ChainEnd,
    /// The safety step cap was reached.
    StepCapReached,
}

/// One tile visited by the tongue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TongueStep {
    pub position: Position,
    pub verdict: Verdict,
    /// Travel direction after this tile.
    pub direction: Direction,
}

/// Result of resolving a tongue against a read-only board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TonguePath {
    origin: Position,
    color: Color,
    steps: Vec<TongueStep>,
    termination: Termination,
}

impl TonguePath {
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Interaction log in travel order.
    pub fn steps(&self) -> &[TongueStep] {
        &self.steps
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().map(|step| step.position)
    }

    pub fn to_positions(&self) -> Vec<Position> {
        self.positions().collect()
    }

    /// Where the tongue tip comes to rest.
    pub fn last_position(&self) -> Option<Position> {
        self.steps.last().map(|step| step.position)
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of matching grapes passed on the way out.
    pub fn caught(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.verdict == Verdict::EatAndContinue)
            .count()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Walks a tongue of `color` from `origin` (exclusive) towards `direction`.
///
/// The walk never mutates the board and is deterministic for a given board.
/// It visits at most `max_steps` coordinates, so arrow cycles terminate.
pub fn compute_path(
    registry: &TileRegistry,
    origin: Position,
    direction: Direction,
    color: Color,
    max_steps: u32,
) -> TonguePath {
    let mut steps = Vec::new();
    let mut current = origin;
    let mut heading = direction;
    let mut on_grape = false;
    let mut taken = 0;

    let termination = loop {
        if taken >= max_steps {
            break Termination::StepCapReached;
        }
        taken += 1;

        let next = current.step(heading);
        let Some(tile) = registry.tile_at(next) else {
            break Termination::Boundary;
        };

        let interaction = resolve(color, heading, tile.topmost());
        if on_grape && interaction.verdict == Verdict::Continue {
            break Termination::ChainEnd;
        }

        current = next;
        heading = interaction.direction;
        steps.push(TongueStep {
            position: next,
            verdict: interaction.verdict,
            direction: heading,
        });

        match interaction.verdict {
            Verdict::Stop => {
                tracing::debug!("tongue blocked at {}", next);
                break Termination::Blocked;
            }
            Verdict::Turn => {
                tracing::debug!("tongue turned {} at {}", heading, next);
                on_grape = false;
            }
            Verdict::EatAndContinue => {
                tracing::debug!("tongue passed matching grape at {}", next);
                on_grape = true;
            }
            Verdict::Continue => {}
        }
    };

    tracing::debug!(
        "tongue from {} resolved: {} tiles, {:?}",
        origin,
        steps.len(),
        termination
    );

    TonguePath {
        origin,
        color,
        steps,
        termination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridDimensions;
    use crate::state::{Entity, EntityId, Tile};
    use proptest::prelude::*;

    /// Builds a fully tiled board and places `objects` on it.
    fn board(width: u32, height: u32, objects: &[(i32, i32, Entity)]) -> TileRegistry {
        let mut registry = TileRegistry::new(GridDimensions::new(width, height));
        for position in GridDimensions::new(width, height).positions() {
            let cell = registry.allocate_entity_id();
            let mut tile = Tile::new(position, cell);
            for (x, y, entity) in objects {
                if Position::new(*x, *y) == position {
                    tile.push(*entity).unwrap();
                }
            }
            registry.register_tile(tile);
        }
        registry
    }

    fn grape(id: u32, color: Color) -> Entity {
        Entity::grape(EntityId(1000 + id), color)
    }

    fn arrow(id: u32, color: Color, facing: Direction) -> Entity {
        Entity::arrow(EntityId(1000 + id), color, facing)
    }

    #[test]
    fn straight_line_rests_on_caught_grape() {
        let registry = board(6, 6, &[(2, 0, grape(1, Color::Red))]);
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);

        assert_eq!(
            path.to_positions(),
            vec![Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(path.termination(), Termination::ChainEnd);
        assert_eq!(path.caught(), 1);
    }

    #[test]
    fn arrow_turns_the_tongue() {
        let registry = board(
            6,
            6,
            &[
                (2, 0, arrow(1, Color::Blue, Direction::Up)),
                (2, 2, grape(2, Color::Blue)),
            ],
        );
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Blue, 100);

        assert_eq!(
            path.to_positions(),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2)
            ]
        );
        assert_eq!(path.steps()[1].verdict, Verdict::Turn);
        assert_eq!(path.steps()[1].direction, Direction::Up);
    }

    #[test]
    fn arrow_after_a_catch_keeps_the_tongue_going() {
        let registry = board(
            6,
            6,
            &[
                (1, 0, grape(1, Color::Red)),
                (2, 0, arrow(2, Color::Red, Direction::Up)),
                (2, 2, grape(3, Color::Red)),
            ],
        );
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);

        assert_eq!(
            path.to_positions(),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2)
            ]
        );
        assert_eq!(path.termination(), Termination::ChainEnd);
        assert_eq!(path.caught(), 2);
    }

    #[test]
    fn mismatched_neighbour_blocks_immediately() {
        let registry = board(6, 6, &[(1, 0, grape(1, Color::Yellow))]);
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Green, 100);

        assert_eq!(path.to_positions(), vec![Position::new(1, 0)]);
        assert_eq!(path.termination(), Termination::Blocked);
        assert_eq!(path.steps()[0].verdict, Verdict::Stop);
    }

    #[test]
    fn empty_row_runs_to_the_boundary() {
        let registry = board(6, 6, &[]);
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);
        assert_eq!(path.len(), 5);
        assert_eq!(path.termination(), Termination::Boundary);
    }

    #[test]
    fn consecutive_grapes_are_all_passed() {
        let registry = board(
            6,
            6,
            &[(1, 0, grape(1, Color::Red)), (2, 0, grape(2, Color::Red))],
        );
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);
        assert_eq!(path.caught(), 2);
        assert_eq!(path.last_position(), Some(Position::new(2, 0)));
    }

    #[test]
    fn wrong_grape_after_a_catch_is_included_and_blocks() {
        let registry = board(
            6,
            6,
            &[(1, 0, grape(1, Color::Red)), (2, 0, grape(2, Color::Blue))],
        );
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);
        assert_eq!(path.last_position(), Some(Position::new(2, 0)));
        assert_eq!(path.termination(), Termination::Blocked);
    }

    #[test]
    fn arrow_cycle_hits_the_step_cap() {
        // (1,0)↑ → (1,1)→ → (2,1)↓ → (2,0)← → back to (1,0)
        let registry = board(
            6,
            6,
            &[
                (1, 0, arrow(1, Color::Red, Direction::Up)),
                (1, 1, arrow(2, Color::Red, Direction::Right)),
                (2, 1, arrow(3, Color::Red, Direction::Down)),
                (2, 0, arrow(4, Color::Red, Direction::Left)),
            ],
        );
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 37);
        assert_eq!(path.len(), 37);
        assert_eq!(path.termination(), Termination::StepCapReached);
    }

    #[test]
    fn zero_step_cap_yields_empty_path() {
        let registry = board(6, 6, &[]);
        let path = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 0);
        assert!(path.is_empty());
        assert_eq!(path.termination(), Termination::StepCapReached);
    }

    #[test]
    fn does_not_mutate_the_board() {
        let registry = board(6, 6, &[(2, 0, grape(1, Color::Red))]);
        let before = registry.clone();
        let _ = compute_path(&registry, Position::ORIGIN, Direction::Right, Color::Red, 100);
        assert_eq!(registry, before);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    fn arb_color() -> impl Strategy<Value = Color> {
        prop::sample::select(Color::ALL.to_vec())
    }

    /// Edge coordinate whose neighbour in `direction` lies outside the grid.
    fn edge_towards(direction: Direction, width: u32, height: u32, offset: u32) -> Position {
        let (w, h) = (width as i32, height as i32);
        match direction {
            Direction::Up => Position::new((offset % width) as i32, h - 1),
            Direction::Down => Position::new((offset % width) as i32, 0),
            Direction::Left => Position::new(0, (offset % height) as i32),
            Direction::Right => Position::new(w - 1, (offset % height) as i32),
        }
    }

    proptest! {
        #[test]
        fn no_neighbour_means_empty_path(
            width in 1u32..10,
            height in 1u32..10,
            offset in 0u32..100,
            direction in arb_direction(),
            color in arb_color(),
        ) {
            let registry = board(width, height, &[]);
            let origin = edge_towards(direction, width, height, offset);
            let path = compute_path(&registry, origin, direction, color, 100);
            prop_assert!(path.is_empty());
            prop_assert_eq!(path.termination(), Termination::Boundary);
        }

        #[test]
        fn path_never_exceeds_step_cap(
            facings in prop::collection::vec(arb_direction(), 36),
            colors in prop::collection::vec(arb_color(), 36),
            tongue in arb_color(),
            heading in arb_direction(),
            cap in 0u32..60,
        ) {
            let objects: Vec<_> = facings
                .iter()
                .zip(colors.iter())
                .enumerate()
                .filter(|(i, _)| *i != 0)
                .map(|(i, (facing, color))| {
                    let (x, y) = ((i % 6) as i32, (i / 6) as i32);
                    (x, y, arrow(i as u32, *color, *facing))
                })
                .collect();
            let registry = board(6, 6, &objects);

            let first = compute_path(&registry, Position::ORIGIN, heading, tongue, cap);
            let second = compute_path(&registry, Position::ORIGIN, heading, tongue, cap);
            prop_assert!(first.len() <= cap as usize);
            prop_assert_eq!(first, second);
        }
    }
}
