use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell delta for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// All four directions, for random initial heading choice.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// High-level input events consumed by the application loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
    CycleTheme,
}

/// Polls for the next input event without blocking past `timeout`.
///
/// Key releases and repeats from terminals that report them are ignored so a
/// held key does not double-fire.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(decode_key(key)),
        _ => Ok(None),
    }
}

/// Maps a key press to a game input, if it is bound.
#[must_use]
pub fn decode_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p' | 'P') => Some(GameInput::Pause),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char('t' | 'T') => Some(GameInput::CycleTheme),
        KeyCode::Enter | KeyCode::Char(' ' | 'y' | 'Y') => Some(GameInput::Confirm),
        _ => None,
    }
}

/// Latches at most one direction per gameplay tick, first key wins.
///
/// Extra direction presses between ticks are dropped rather than queued;
/// the latched value is handed to the round once per tick via [`take`].
///
/// [`take`]: DirectionLatch::take
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionLatch {
    pending: Option<Direction>,
}

impl DirectionLatch {
    /// Stores `direction` unless one is already latched for this tick.
    pub fn offer(&mut self, direction: Direction) {
        if self.pending.is_none() {
            self.pending = Some(direction);
        }
    }

    /// Returns and clears the latched direction.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}
