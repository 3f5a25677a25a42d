use std::collections::VecDeque;

use crate::config::{EdgePolicy, GridSize};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AdvanceOutcome {
    /// The head moved to a free cell.
    Moved,
    /// The head stepped past the grid edge under the bounded policy.
    /// The body is left unchanged.
    OutOfBounds,
    /// The head landed on a body segment.
    SelfCollision,
}

/// Mutable snake state: ordered body cells, heading, and target length.
///
/// The body only grows up to `target_length`; eating raises the target and
/// the extra segment becomes visible on the following tick, when the tail
/// is not trimmed.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    target_length: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn new(start: Position, heading: Direction) -> Self {
        Self::with_target_length(start, heading, 1)
    }

    /// Creates a one-cell snake that will grow towards `target_length`.
    #[must_use]
    pub fn with_target_length(start: Position, heading: Direction, target_length: usize) -> Self {
        debug_assert!(target_length >= 1);

        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            heading,
            target_length: target_length.max(1),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        let target_length = segments.len();
        Self {
            body: VecDeque::from(segments),
            heading,
            target_length,
        }
    }

    /// Changes heading unless the request would reverse into the body.
    ///
    /// A request for the exact opposite of the current heading is ignored,
    /// regardless of body length.
    pub fn turn(&mut self, requested: Direction) {
        if requested != self.heading.opposite() {
            self.heading = requested;
        }
    }

    /// Raises the target length by one; the body catches up on a later tick.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Moves the head one cell along the current heading.
    ///
    /// The new head is inserted first and the self-collision check runs on
    /// that pre-trim body, so stepping into the cell the tail is about to
    /// vacate still counts as a collision. The tail is trimmed afterwards
    /// whenever the body exceeds the target length.
    pub fn advance(&mut self, bounds: GridSize, edge_policy: EdgePolicy) -> AdvanceOutcome {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next = self.head().stepped(self.heading);
        let next = match edge_policy {
            EdgePolicy::Bounded => {
                if !next.is_within_bounds(bounds) {
                    return AdvanceOutcome::OutOfBounds;
                }
                next
            }
            EdgePolicy::Toroidal => next.wrapped(bounds),
        };

        self.body.push_front(next);

        // Index 0 is the new head and index 1 the cell it just vacated;
        // only the rest of the body is fatal to re-enter.
        let collided = self.body.iter().skip(2).any(|segment| *segment == next);

        if self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }

        if collided {
            AdvanceOutcome::SelfCollision
        } else {
            AdvanceOutcome::Moved
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the length the body is growing towards.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::{EdgePolicy, GridSize};
    use crate::input::Direction;

    use super::{AdvanceOutcome, Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let wrapped_left = Position { x: -1, y: 3 }.wrapped(BOUNDS);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(BOUNDS);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        let outcome = snake.advance(BOUNDS, EdgePolicy::Bounded);

        assert_eq!(outcome, AdvanceOutcome::Moved);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn turn_to_opposite_heading_is_ignored() {
        for heading in Direction::ALL {
            let mut snake = Snake::new(Position { x: 5, y: 5 }, heading);

            snake.turn(heading.opposite());
            assert_eq!(snake.heading(), heading);

            // A single-cell snake rejects the reversal too; the rule is on
            // the heading alone.
            assert_eq!(snake.len(), 1);
        }

        let mut long = Snake::from_segments(
            vec![
                Position { x: 4, y: 4 },
                Position { x: 3, y: 4 },
                Position { x: 2, y: 4 },
            ],
            Direction::Right,
        );
        long.turn(Direction::Left);
        assert_eq!(long.heading(), Direction::Right);
    }

    #[test]
    fn turn_to_perpendicular_heading_applies() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.turn(Direction::Up);

        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn growth_lags_one_tick_behind_target() {
        let mut snake = Snake::new(Position { x: 2, y: 2 }, Direction::Right);

        snake.grow();
        assert_eq!(snake.len(), 1);

        snake.advance(BOUNDS, EdgePolicy::Bounded);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.target_length(), 2);

        // A further advance without feeding only slides the body.
        snake.advance(BOUNDS, EdgePolicy::Bounded);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn bounded_policy_reports_edge_exit_and_keeps_body() {
        let mut snake = Snake::new(
            Position {
                x: i32::from(BOUNDS.width) - 1,
                y: 3,
            },
            Direction::Right,
        );

        let outcome = snake.advance(BOUNDS, EdgePolicy::Bounded);

        assert_eq!(outcome, AdvanceOutcome::OutOfBounds);
        assert_eq!(
            snake.head(),
            Position {
                x: i32::from(BOUNDS.width) - 1,
                y: 3
            }
        );
    }

    #[test]
    fn toroidal_policy_wraps_to_opposite_edge() {
        let mut snake = Snake::new(
            Position {
                x: i32::from(BOUNDS.width) - 1,
                y: 3,
            },
            Direction::Right,
        );

        let outcome = snake.advance(BOUNDS, EdgePolicy::Toroidal);

        assert_eq!(outcome, AdvanceOutcome::Moved);
        assert_eq!(snake.head(), Position { x: 0, y: 3 });
    }

    #[test]
    fn stepping_into_own_body_is_fatal() {
        // A 2x2 loop: head at (2,2) heading Left, body curls back to (3,2).
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Up,
        );

        // Right from (2,2) lands on (3,2), three segments in.
        snake.turn(Direction::Right);
        let outcome = snake.advance(BOUNDS, EdgePolicy::Bounded);

        assert_eq!(outcome, AdvanceOutcome::SelfCollision);
    }

    #[test]
    fn reentering_the_vacated_cell_is_allowed() {
        // Index 1 after the insert is the cell the head just vacated;
        // moving next to it must not be flagged.
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
            Direction::Right,
        );

        snake.turn(Direction::Down);
        let outcome = snake.advance(BOUNDS, EdgePolicy::Bounded);

        assert_eq!(outcome, AdvanceOutcome::Moved);
        assert_eq!(snake.head(), Position { x: 2, y: 3 });
    }

    #[test]
    fn chasing_the_tail_into_its_cell_is_fatal() {
        // Four cells in a square; the head steps into the cell the tail
        // would vacate this very tick. The pre-trim check makes it fatal.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
            ],
            Direction::Up,
        );

        let outcome = snake.advance(BOUNDS, EdgePolicy::Bounded);

        assert_eq!(outcome, AdvanceOutcome::SelfCollision);
    }

    #[test]
    fn surviving_body_never_holds_duplicate_cells() {
        let mut snake = Snake::with_target_length(Position { x: 1, y: 1 }, Direction::Right, 4);

        let path = [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];

        for direction in path {
            snake.turn(direction);
            assert_eq!(snake.advance(BOUNDS, EdgePolicy::Bounded), AdvanceOutcome::Moved);

            let unique: HashSet<_> = snake.segments().copied().collect();
            assert_eq!(unique.len(), snake.len());
        }
    }
}
