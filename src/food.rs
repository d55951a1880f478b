use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GridSize;
use crate::error::SnakeError;
use crate::snake::{Position, Snake};

/// Random draws tried before falling back to enumerating free cells.
pub const SPAWN_SAMPLE_ATTEMPTS: usize = 64;

/// Fruit category. The set is closed; each kind has a fixed point value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FruitKind {
    Apple,
    Orange,
    Blueberry,
    Strawberry,
    Grape,
}

impl FruitKind {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// Every category in display order.
    pub const ALL: [FruitKind; Self::COUNT] = [
        Self::Apple,
        Self::Orange,
        Self::Blueberry,
        Self::Strawberry,
        Self::Grape,
    ];

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Apple => 10,
            Self::Orange => 15,
            Self::Blueberry => 20,
            Self::Strawberry => 25,
            Self::Grape => 30,
        }
    }

    /// Lowercase category name as used in config files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Orange => "orange",
            Self::Blueberry => "blueberry",
            Self::Strawberry => "strawberry",
            Self::Grape => "grape",
        }
    }

    /// Capitalized name for on-screen text.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Orange => "Orange",
            Self::Blueberry => "Blueberry",
            Self::Strawberry => "Strawberry",
            Self::Grape => "Grape",
        }
    }

    /// Position of this kind inside [`FruitKind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FruitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FruitKind {
    type Err = SnakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SnakeError::InvalidCategory(raw.to_owned()))
    }
}

/// Point value for a category given by name.
pub fn points_for(name: &str) -> Result<u32, SnakeError> {
    name.parse::<FruitKind>().map(FruitKind::points)
}

/// Fruit currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FruitKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, kind: FruitKind) -> Self {
        Self { position, kind }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        self.kind.points()
    }

    /// Spawns a fruit drawn uniformly from `categories` on a free cell.
    ///
    /// Returns `None` when the snake covers the whole board or
    /// `categories` is empty.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        categories: &[FruitKind],
    ) -> Option<Self> {
        let position = spawn_position(rng, bounds, snake)?;
        let kind = *categories.choose(rng)?;
        Some(Self::new(position, kind))
    }
}

/// Picks a uniformly random cell not occupied by the snake.
///
/// Samples at random first, which is cheap while the board is sparse. After
/// [`SPAWN_SAMPLE_ATTEMPTS`] misses it enumerates the free cells instead, so
/// a crowded board never loops unboundedly. Returns `None` on a full board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);

    for _ in 0..SPAWN_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates.choose(rng).copied()
}
