use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Returned by placement when the snake covers every cell of the grid.
///
/// The round controller turns this into a victory; it never escapes the
/// crate as an error.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("no free cell left on the board")]
pub struct NoSpaceAvailable;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, NoSpaceAvailable> {
        spawn_position(rng, bounds, snake).map(Self::at)
    }
}

/// Picks a free cell uniformly at random over the whole grid.
///
/// The draw is over the enumerated free set, not a reroll against the
/// snake, so a long body cannot bias placement or hide food under itself.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, NoSpaceAvailable> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(NoSpaceAvailable);
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{spawn_position, NoSpaceAvailable};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let position = spawn_position(&mut rng, bounds, &snake)
                .expect("grid with free cells must yield a position");
            assert!(!snake.occupies(position));
            assert!(position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn spawn_on_full_board_reports_no_space() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Down,
        );

        assert_eq!(
            spawn_position(&mut rng, bounds, &snake),
            Err(NoSpaceAvailable)
        );
    }

    #[test]
    fn spawn_covers_free_cells_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = GridSize {
            width: 3,
            height: 3,
        };
        // Three of nine cells occupied, leaving six candidates.
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );

        const DRAWS: u32 = 6_000;
        let mut counts: HashMap<Position, u32> = HashMap::new();
        for _ in 0..DRAWS {
            let position = spawn_position(&mut rng, bounds, &snake).expect("free cells remain");
            *counts.entry(position).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every free cell should be hit");

        // Expected 1000 hits per cell; a seeded run stays well inside ±30%.
        for (&position, &count) in &counts {
            assert!(
                (700..=1_300).contains(&count),
                "cell {position:?} drawn {count} times out of {DRAWS}",
            );
        }
    }
}
