use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Neighbouring cell one step in `direction`, wrapped around the grid edges.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

/// Snake body and movement state on a wrapping grid.
///
/// The head is the front of `body`. Direction changes are held in
/// `pending_direction` until the next [`Snake::move_forward`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
            grow: false,
        }
    }

    /// Queues growth on the next movement tick.
    ///
    /// The flag does not stack: any number of calls between two moves
    /// adds exactly one segment.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Returns true when growth is queued for the next move.
    #[must_use]
    pub fn growth_pending(&self) -> bool {
        self.grow
    }

    /// Applies one movement step, wrapping at the grid edges.
    pub fn move_forward(&mut self, bounds: GridSize) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        self.direction = self.pending_direction;
        let next_head = self.next_head_position(bounds);

        self.body.push_front(next_head);
        if !self.grow {
            let _ = self.body.pop_back();
        }
        self.grow = false;
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        self.head().step(self.pending_direction, bounds)
    }

    /// Requests a new heading for the next move.
    ///
    /// Reversals are judged against the direction of the last move, not
    /// against an earlier request in the same tick, so a quick
    /// Up-then-Left while heading Right cannot fold the head into the neck.
    /// Returns whether the request was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // from_segments guarantees a non-empty body and moves never shrink it.
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
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

    /// Direction of the most recent move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next move will use.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 15,
    };

    fn body(snake: &Snake) -> Vec<Position> {
        snake.segments().copied().collect()
    }

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position::new(5, 7), Direction::Right);

        snake.move_forward(BOUNDS);

        assert_eq!(body(&snake), vec![Position::new(6, 7)]);
    }

    #[test]
    fn growth_then_move_keeps_previous_head_as_neck() {
        let mut snake = Snake::new(Position::new(5, 7), Direction::Right);
        snake.move_forward(BOUNDS);

        snake.grow_next();
        snake.move_forward(BOUNDS);

        assert_eq!(body(&snake), vec![Position::new(7, 7), Position::new(6, 7)]);
        assert!(!snake.growth_pending());
    }

    #[test]
    fn repeated_grow_calls_add_a_single_segment() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.grow_next();
        snake.grow_next();
        snake.grow_next();
        snake.move_forward(BOUNDS);
        assert_eq!(snake.len(), 2);

        snake.move_forward(BOUNDS);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn moving_off_each_edge_reenters_on_the_opposite_side() {
        let cases = [
            (Position::new(19, 4), Direction::Right, Position::new(0, 4)),
            (Position::new(0, 4), Direction::Left, Position::new(19, 4)),
            (Position::new(3, 0), Direction::Up, Position::new(3, 14)),
            (Position::new(3, 14), Direction::Down, Position::new(3, 0)),
        ];

        for (start, direction, expected) in cases {
            let mut snake = Snake::new(start, direction);
            snake.move_forward(BOUNDS);
            assert_eq!(snake.head(), expected, "moving {direction:?} from {start:?}");
            assert!(snake.head().is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn reversal_after_moving_is_rejected_for_every_direction() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut snake = Snake::new(Position::new(5, 5), direction);
            snake.move_forward(BOUNDS);

            assert!(!snake.set_direction(direction.opposite()));
            assert_eq!(snake.pending_direction(), direction);
            assert_eq!(snake.direction(), direction);
        }
    }

    #[test]
    fn two_quick_turns_cannot_reverse_into_neck() {
        let mut snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );

        assert!(snake.set_direction(Direction::Up));
        assert!(!snake.set_direction(Direction::Left));
        snake.move_forward(BOUNDS);

        assert_eq!(snake.head(), Position::new(5, 4));
        assert!(!snake.head_overlaps_body());
    }

    #[test]
    fn last_accepted_direction_wins() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);
        snake.move_forward(BOUNDS);

        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn collision_is_false_for_unique_cells() {
        let snake = Snake::from_segments(
            vec![Position::new(2, 2), Position::new(1, 2), Position::new(1, 3)],
            Direction::Right,
        );

        assert!(!snake.head_overlaps_body());
    }

    #[test]
    fn collision_detected_after_moving_into_own_body() {
        let mut snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Up,
        );
        snake.set_direction(Direction::Left);

        snake.move_forward(BOUNDS);

        assert_eq!(snake.head(), Position::new(1, 2));
        assert!(snake.head_overlaps_body());
    }
}
