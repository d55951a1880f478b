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

    /// Unit step in grid coordinates (y grows downwards).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates terminal key presses into [`GameInput`] values.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one key press and maps it.
    ///
    /// Returns `Ok(None)` on timeout, for non-key events, and for keys
    /// without a binding.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(self.map_key(key)),
            _ => Ok(None),
        }
    }

    /// Maps one key event to a game input.
    #[must_use]
    pub fn map_key(&self, key: KeyEvent) -> Option<GameInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(GameInput::Quit);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
            KeyCode::Char('p' | 'P' | ' ') => GameInput::Pause,
            KeyCode::Char('r' | 'R') | KeyCode::Enter => GameInput::Restart,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
            _ => return None,
        };

        Some(input)
    }
}
