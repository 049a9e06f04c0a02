mod board;
mod direction;
mod snake;
pub(crate) use self::direction::Direction;
use self::board::Bounds;
use self::snake::Snake;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect, Size},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

/// The game state machine: the board, the snake, the food, and the current
/// heading, advanced one cell per tick.
///
/// There is no game-over state.  Running into a wall or into the snake's own
/// body silently starts a fresh episode via [`Game::reset`].
#[derive(Clone, Debug)]
pub(crate) struct Game<R = StdRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    food: Position,
    heading: Option<Direction>,
}

impl Game<StdRng> {
    /// Create a new game on a board derived from a drawing surface of size
    /// `surface`.  The surface must be at least
    /// [`MIN_SURFACE_SIZE`][consts::MIN_SURFACE_SIZE] so that the derived
    /// grid has a free cell for the food.
    pub(crate) fn new(surface: Size) -> Game {
        Game::new_with_rng(surface, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(surface: Size, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            bounds: Bounds::from_surface(surface),
            snake: Snake::spawn(Position::ORIGIN),
            food: Position::ORIGIN,
            heading: None,
        };
        game.reset();
        game
    }

    /// Start a new episode: clear the heading, shrink the snake to a single
    /// uniformly random cell, and place fresh food.
    fn reset(&mut self) {
        self.heading = None;
        let head = self.random_cell();
        self.snake = Snake::spawn(head);
        self.spawn_food();
    }

    /// Place the food uniformly at random among the cells not occupied by
    /// the snake.  If the snake covers the whole board the food is left
    /// where it is; the next tick cannot avoid a collision, so the episode
    /// resets immediately anyway.
    fn spawn_food(&mut self) {
        let snake = &self.snake;
        if let Some(cell) = self
            .bounds
            .positions()
            .filter(|&p| !snake.contains(p))
            .choose(&mut self.rng)
        {
            self.food = cell;
        }
    }

    fn random_cell(&mut self) -> Position {
        Position::new(
            self.rng.random_range(0..self.bounds.width),
            self.rng.random_range(0..self.bounds.height),
        )
    }

    /// Advance the simulation by one tick: move the snake one cell along the
    /// current heading, resetting on a wall or self collision and growing on
    /// food.
    ///
    /// With no heading set the snake is a fresh single cell at rest, and the
    /// tick has nothing to do.
    pub(crate) fn tick(&mut self) {
        let Some(heading) = self.heading else {
            return;
        };
        let Some(head) = heading.advance(self.snake.head(), self.bounds) else {
            self.reset();
            return;
        };
        if self.snake.hits_body(head) {
            self.reset();
            return;
        }
        let vacated = self.snake.slither(head);
        if head == self.food {
            self.snake.grow_tail(vacated);
            self.spawn_food();
        }
    }

    /// Change the snake's heading.  An immediate 180° turn is ignored while
    /// the snake has a body to run into; a lone head may turn freely.
    pub(crate) fn steer(&mut self, direction: Direction) {
        if self.snake.len() > 1 && self.heading == Some(direction.reverse()) {
            return;
        }
        self.heading = Some(direction);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let block_size = Size::new(
            self.bounds
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            self.bounds.height.saturating_add(2),
        );
        let block_area = center_rect(display, block_size);
        Block::bordered().render(block_area, buf);
        let board_area = block_area.inner(Margin::new(1, 1));
        buf.set_style(board_area, consts::BOARD_STYLE);
        let mut canvas = Canvas {
            area: board_area,
            buf,
        };
        for &cell in self.snake.cells() {
            canvas.draw_cell(cell, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
    }
}

/// Painter mapping grid cells onto a board-sized region of the buffer
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        // the board block may be clamped to a small terminal; never paint
        // over its border or beyond it
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyTracker;
    use crossterm::event::KeyCode;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn seeded(surface: Size) -> Game<ChaCha12Rng> {
        Game::new_with_rng(surface, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn in_bounds(pos: Position, bounds: Bounds) -> bool {
        pos.x < bounds.width && pos.y < bounds.height
    }

    #[test]
    fn new_game_is_a_fresh_episode() {
        let game = seeded(Size::new(128, 36));
        assert_eq!(game.bounds, Bounds {
            width: 64,
            height: 36
        });
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.heading, None);
        assert!(in_bounds(game.snake.head(), game.bounds));
        assert!(in_bounds(game.food, game.bounds));
        assert_ne!(game.food, game.snake.head());
    }

    #[test]
    fn steer_then_tick_moves_the_head() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake::spawn(Position::new(10, 10));
        game.food = Position::new(0, 0);
        game.steer(Direction::East);
        game.tick();
        assert_eq!(game.snake.cells(), &VecDeque::from([Position::new(11, 10)]));
        assert_eq!(game.heading, Some(Direction::East));
    }

    #[test]
    fn tick_without_heading_is_a_noop() {
        let mut game = seeded(Size::new(128, 36));
        let snake = game.snake.clone();
        let food = game.food;
        game.tick();
        assert_eq!(game.snake, snake);
        assert_eq!(game.food, food);
        assert_eq!(game.heading, None);
    }

    #[test]
    fn eating_food_grows_the_tail() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ]),
        };
        game.heading = Some(Direction::East);
        game.food = Position::new(6, 5);
        game.tick();
        assert_eq!(
            game.snake.cells(),
            &VecDeque::from([
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ])
        );
        assert!(in_bounds(game.food, game.bounds));
        assert!(!game.snake.contains(game.food));
    }

    #[test]
    fn missing_the_food_keeps_the_length() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ]),
        };
        game.heading = Some(Direction::East);
        game.food = Position::new(20, 20);
        game.tick();
        assert_eq!(
            game.snake.cells(),
            &VecDeque::from([
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
            ])
        );
        assert_eq!(game.food, Position::new(20, 20));
    }

    #[test]
    fn hitting_a_wall_resets_the_episode() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake::spawn(Position::new(0, 5));
        game.steer(Direction::West);
        game.tick();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.heading, None);
        assert!(in_bounds(game.snake.head(), game.bounds));
        assert_ne!(game.food, game.snake.head());
    }

    #[test]
    fn hitting_the_body_resets_the_episode() {
        let mut game = seeded(Size::new(128, 36));
        // head about to run into the segment at (5, 6)
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
            ]),
        };
        game.heading = Some(Direction::South);
        game.food = Position::new(0, 0);
        game.tick();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.heading, None);
    }

    #[test]
    fn chasing_the_tail_is_legal() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ]),
        };
        game.heading = Some(Direction::South);
        game.food = Position::new(0, 0);
        game.tick();
        assert_eq!(
            game.snake.cells(),
            &VecDeque::from([
                Position::new(5, 6),
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
            ])
        );
    }

    #[test]
    fn no_instant_u_turn_with_a_body() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake {
            cells: VecDeque::from([Position::new(5, 5), Position::new(4, 5)]),
        };
        game.heading = Some(Direction::East);
        game.steer(Direction::West);
        assert_eq!(game.heading, Some(Direction::East));
        game.steer(Direction::North);
        assert_eq!(game.heading, Some(Direction::North));
    }

    #[test]
    fn a_lone_head_may_reverse() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake::spawn(Position::new(5, 5));
        game.heading = Some(Direction::East);
        game.steer(Direction::West);
        assert_eq!(game.heading, Some(Direction::West));
    }

    #[test]
    fn food_never_lands_on_the_snake() {
        // 2×2 board with three cells occupied: only (1, 1) is free
        let mut game = seeded(Size::new(4, 2));
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
            ]),
        };
        for _ in 0..10 {
            game.spawn_food();
            assert_eq!(game.food, Position::new(1, 1));
        }
    }

    #[test]
    fn latest_held_key_steers_a_lone_head() {
        let mut game = seeded(Size::new(128, 36));
        game.snake = Snake::spawn(Position::new(10, 10));
        game.food = Position::new(0, 0);
        let mut tracker = KeyTracker::new();
        tracker.press(KeyCode::Up);
        tracker.press(KeyCode::Down);
        let direction = tracker.last().and_then(Direction::from_key).unwrap();
        game.steer(direction);
        assert_eq!(game.heading, Some(Direction::South));
        game.tick();
        assert_eq!(game.snake.cells(), &VecDeque::from([Position::new(10, 11)]));
    }

    #[test]
    fn render_board_snake_and_food() {
        let mut game = seeded(Size::new(8, 3));
        game.snake = Snake {
            cells: VecDeque::from([Position::new(1, 1), Position::new(2, 1)]),
        };
        game.food = Position::new(3, 0);
        let area = Rect::new(0, 0, 10, 5);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌────────┐",
            "│      █ │",
            "│  █ █   │",
            "│        │",
            "└────────┘",
        ]);
        expected.set_style(Rect::new(1, 1, 8, 3), consts::BOARD_STYLE);
        expected.set_style(Rect::new(3, 2, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(5, 2, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(7, 1, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_clips_an_oversized_board_at_the_border() {
        // a 20×3-cell board needs 42 columns; the 10-column terminal clamps
        // the block, and cells past the clamp must not paint over the border
        let mut game = seeded(Size::new(40, 3));
        game.snake = Snake {
            cells: VecDeque::from([
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(4, 1),
            ]),
        };
        game.food = Position::new(0, 1);
        let area = Rect::new(0, 0, 10, 5);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        // grid (4, 1) would land on the right border column and is dropped
        let mut expected = Buffer::with_lines([
            "┌────────┐",
            "│        │",
            "│█   █ █ │",
            "│        │",
            "└────────┘",
        ]);
        expected.set_style(Rect::new(1, 1, 8, 3), consts::BOARD_STYLE);
        expected.set_style(Rect::new(1, 2, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(5, 2, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(7, 2, 1, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
