use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::{GridSize, RoundConfig};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{AdvanceOutcome, Position, Snake};

/// Lifecycle phase of one round of play.
///
/// ```text
/// Pending --start()--> Running --collision--> EndedLoss
///                      Running --grid full--> EndedWin
/// EndedLoss/EndedWin --reset()--> Pending
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundPhase {
    Pending,
    Running,
    EndedLoss,
    EndedWin,
}

/// What ended a lost round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Contract violation: an operation was invoked in a phase that forbids it.
///
/// Collisions and the full-grid win are not errors; they are ordinary
/// phase transitions. This error only fires when the embedding layer calls
/// the round out of order, which is a bug there.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RoundError {
    #[error("`{operation}` is not valid while the round is {phase:?}")]
    InvalidTransition {
        operation: &'static str,
        phase: RoundPhase,
    },
}

/// One round of play: owns the snake, the food, and the score.
///
/// Strictly single-threaded and synchronous; every [`tick`] completes fully
/// (including a food respawn) before the next is accepted. Randomness is
/// confined to the initial heading and food placement, so a fixed
/// `random_seed` makes the whole round a pure function of the tick inputs.
///
/// [`tick`]: Round::tick
#[derive(Debug, Clone)]
pub struct Round {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    config: RoundConfig,
    phase: RoundPhase,
    death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl Round {
    /// Creates a pending round; call [`start`](Round::start) to begin play.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut round = Self {
            snake: Snake::new(Position { x: 0, y: 0 }, Direction::Right),
            food: Food::at(Position { x: 0, y: 0 }),
            score: config.initial_score,
            tick_count: 0,
            config,
            phase: RoundPhase::Pending,
            death_reason: None,
            rng,
        };
        round.respawn_entities();
        round
    }

    /// Begins play. Valid only while pending.
    pub fn start(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Pending {
            return Err(RoundError::InvalidTransition {
                operation: "start",
                phase: self.phase,
            });
        }

        self.respawn_entities();
        self.score = self.config.initial_score;
        self.tick_count = 0;
        self.death_reason = None;
        // A one-cell grid is already full at start; everything else runs.
        self.phase = if self.snake.len() == self.config.grid.total_cells() {
            RoundPhase::EndedWin
        } else {
            RoundPhase::Running
        };
        Ok(())
    }

    /// Advances the simulation by one tick. Valid only while running.
    ///
    /// A requested heading, if any, is applied before the movement step;
    /// reversals are ignored by [`Snake::turn`]. A fatal move ends the round
    /// with the score and food untouched.
    pub fn tick(&mut self, requested: Option<Direction>) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Running {
            return Err(RoundError::InvalidTransition {
                operation: "tick",
                phase: self.phase,
            });
        }

        self.tick_count += 1;

        if let Some(direction) = requested {
            self.snake.turn(direction);
        }

        match self.snake.advance(self.config.grid, self.config.edge_policy) {
            AdvanceOutcome::OutOfBounds => {
                self.death_reason = Some(DeathReason::WallCollision);
                self.phase = RoundPhase::EndedLoss;
                return Ok(());
            }
            AdvanceOutcome::SelfCollision => {
                self.death_reason = Some(DeathReason::SelfCollision);
                self.phase = RoundPhase::EndedLoss;
                return Ok(());
            }
            AdvanceOutcome::Moved => {}
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow();

            match Food::spawn(&mut self.rng, self.config.grid, &self.snake) {
                Ok(food) => self.food = food,
                // The body covers the grid; the win, not an error.
                Err(_) => {
                    self.phase = RoundPhase::EndedWin;
                    return Ok(());
                }
            }
        }

        if self.snake.len() == self.config.grid.total_cells() {
            self.phase = RoundPhase::EndedWin;
        }

        Ok(())
    }

    /// Returns to pending for a replay. Valid only after the round ended.
    pub fn reset(&mut self) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::EndedLoss | RoundPhase::EndedWin => {
                self.respawn_entities();
                self.score = self.config.initial_score;
                self.tick_count = 0;
                self.death_reason = None;
                self.phase = RoundPhase::Pending;
                Ok(())
            }
            phase => Err(RoundError::InvalidTransition {
                operation: "reset",
                phase,
            }),
        }
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns why the round was lost, if it was.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Returns the grid dimensions for this round.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Returns the round configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Builds a fresh snake at the grid center with a random heading, and
    /// fresh food on a free cell.
    fn respawn_entities(&mut self) {
        let start = Position {
            x: i32::from(self.config.grid.width / 2),
            y: i32::from(self.config.grid.height / 2),
        };
        let heading = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];

        self.snake = Snake::with_target_length(start, heading, self.config.initial_length);
        // A one-cell snake cannot cover a grid of more than one cell, so
        // placement only fails on a degenerate 1x1 grid.
        self.food = Food::spawn(&mut self.rng, self.config.grid, &self.snake)
            .unwrap_or_else(|_| Food::at(start));
    }
}
