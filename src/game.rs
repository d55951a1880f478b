use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, Settings};
use crate::food::{Food, FruitKind};
use crate::input::{Direction, GameInput};
use crate::score::Scoreboard;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    /// The head ran into the body.
    GameOver,
    /// The snake fills every cell, so no fruit can spawn.
    Cleared,
}

impl GameStatus {
    /// Returns true for the states that only a restart leaves.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Cleared)
    }
}

/// Notable things that happened during one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    Ate { kind: FruitKind, points: u32 },
    Collided,
    BoardCleared,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: Scoreboard,
    pub tick_count: u64,
    pub status: GameStatus,
    bounds: GridSize,
    categories: Vec<FruitKind>,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from system entropy.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &Settings, mut rng: StdRng) -> Self {
        let bounds = settings.grid;
        let categories = if settings.fruits.is_empty() {
            FruitKind::ALL.to_vec()
        } else {
            settings.fruits.clone()
        };
        let snake = Snake::new(start_position(bounds), Direction::Right);
        let food = first_food(&mut rng, bounds, &snake, &categories);

        Self {
            snake,
            food,
            score: Scoreboard::new(),
            tick_count: 0,
            status: GameStatus::Playing,
            bounds,
            categories,
            rng,
        }
    }

    /// Starts a fresh round on the same board, keeping the RNG stream.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds), Direction::Right);
        self.food = first_food(&mut self.rng, self.bounds, &self.snake, &self.categories);
        self.score.reset();
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        info!("new round started");
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Order per tick: move, eat (grow, score, respawn), then the
    /// self-collision check against the body after the move.
    pub fn tick(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Playing {
            return events;
        }

        self.tick_count += 1;
        self.snake.move_forward(self.bounds);

        if self.snake.head() == self.food.position {
            let kind = self.food.kind;
            self.snake.grow_next();
            let total = self.score.record(kind);
            events.push(TickEvent::Ate {
                kind,
                points: kind.points(),
            });
            info!(
                "ate {kind} for {} points, score {total}",
                kind.points()
            );

            match Food::spawn(&mut self.rng, self.bounds, &self.snake, &self.categories) {
                Some(food) => {
                    debug!("spawned {} at {:?}", food.kind, food.position);
                    self.food = food;
                }
                None => {
                    self.status = GameStatus::Cleared;
                    events.push(TickEvent::BoardCleared);
                    info!("board cleared with score {total}");
                    return events;
                }
            }
        }

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            events.push(TickEvent::Collided);
            info!(
                "game over after {} ticks, score {}",
                self.tick_count,
                self.score.total()
            );
        }

        events
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Restart => {
                if self.status.is_finished() {
                    self.reset();
                }
            }
            GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Fruit kinds this session draws from.
    #[must_use]
    pub fn categories(&self) -> &[FruitKind] {
        &self.categories
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

/// Starting cell: a quarter of the way across, halfway down.
#[must_use]
pub fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 4),
        y: i32::from(bounds.height / 2),
    }
}

fn first_food(rng: &mut StdRng, bounds: GridSize, snake: &Snake, categories: &[FruitKind]) -> Food {
    // A one-cell snake on a board of at least two cells always leaves room.
    Food::spawn(rng, bounds, snake, categories).unwrap_or_else(|| {
        Food::new(
            snake.head().step(Direction::Right, bounds),
            categories.first().copied().unwrap_or(FruitKind::Apple),
        )
    })
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, Settings};
    use crate::food::{Food, FruitKind};
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus, TickEvent};

    fn settings(width: u16, height: u16) -> Settings {
        Settings {
            grid: GridSize { width, height },
            ..Settings::default()
        }
    }

    #[test]
    fn new_game_starts_at_quarter_width_half_height() {
        let state = GameState::new_with_seed(&settings(20, 15), 1);

        assert_eq!(state.snake.head(), Position { x: 5, y: 7 });
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.score.total(), 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut state = GameState::new_with_seed(&settings(10, 10), 1);
        state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
        state.food = Food::new(Position { x: 2, y: 1 }, FruitKind::Apple);

        state.tick();
        assert_eq!(state.snake.len(), 1);

        state.tick();
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn eating_reports_kind_and_respawns_food_off_the_snake() {
        let mut state = GameState::new_with_seed(&settings(10, 10), 4);
        state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        state.food = Food::new(Position { x: 6, y: 5 }, FruitKind::Blueberry);

        let events = state.tick();

        assert_eq!(
            events,
            vec![TickEvent::Ate {
                kind: FruitKind::Blueberry,
                points: 20
            }]
        );
        assert_eq!(state.score.total(), 20);
        assert_eq!(state.score.eaten(FruitKind::Blueberry), 1);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn snake_wraps_instead_of_hitting_wall() {
        let mut state = GameState::new_with_seed(&settings(4, 4), 2);
        state.snake = Snake::new(Position { x: 3, y: 1 }, Direction::Right);
        state.food = Food::new(Position { x: 2, y: 3 }, FruitKind::Apple);

        let events = state.tick();

        assert!(events.is_empty());
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Position { x: 0, y: 1 });
    }

    #[test]
    fn snake_collision_with_self_sets_game_over() {
        let mut state = GameState::new_with_seed(&settings(6, 6), 3);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 1 },
                Position { x: 1, y: 1 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Down,
        );
        state.food = Food::new(Position { x: 5, y: 5 }, FruitKind::Apple);
        state.apply_input(GameInput::Direction(Direction::Left));

        let events = state.tick();

        assert_eq!(events, vec![TickEvent::Collided]);
        assert!(state.is_game_over());
    }

    #[test]
    fn finished_game_ignores_ticks_and_directions() {
        let mut state = GameState::new_with_seed(&settings(10, 10), 5);
        state.status = GameStatus::GameOver;
        let head = state.snake.head();

        state.apply_input(GameInput::Direction(Direction::Up));
        assert!(state.tick().is_empty());

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn restart_only_honored_when_finished() {
        let mut state = GameState::new_with_seed(&settings(10, 10), 6);
        state.snake = Snake::new(Position { x: 8, y: 8 }, Direction::Down);
        state.score.record(FruitKind::Grape);

        state.apply_input(GameInput::Restart);
        assert_eq!(state.snake.head(), Position { x: 8, y: 8 });
        assert_eq!(state.score.total(), 30);

        state.status = GameStatus::GameOver;
        state.apply_input(GameInput::Restart);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Position { x: 2, y: 5 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score.total(), 0);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn pause_freezes_and_resumes() {
        let mut state = GameState::new_with_seed(&settings(10, 10), 7);
        let head = state.snake.head();

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Paused);
        state.tick();
        assert_eq!(state.snake.head(), head);

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn filling_the_board_clears_it() {
        let mut state = GameState::new_with_seed(&settings(2, 2), 8);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 0, y: 1 },
                Position { x: 1, y: 1 },
            ],
            Direction::Up,
        );
        state.snake.grow_next();
        state.apply_input(GameInput::Direction(Direction::Right));
        state.food = Food::new(Position { x: 1, y: 0 }, FruitKind::Orange);

        let events = state.tick();

        assert_eq!(
            events,
            vec![
                TickEvent::Ate {
                    kind: FruitKind::Orange,
                    points: 15
                },
                TickEvent::BoardCleared
            ]
        );
        assert_eq!(state.status, GameStatus::Cleared);
    }
}
