//! Game module - ties the board, the snake and the random source together
//!
//! [`GameManager`] is the only type the presentation layer talks to: it submits
//! turns, advances ticks with [`GameManager::update`] and reads tiles back for
//! drawing.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::board::Board;
use crate::error::Result;
use crate::rng::{RandomSource, SimpleRng};
use crate::snake::Snake;
use crate::types::{Direction, Point, TileState, FEED_FACTOR};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameManager<R = SimpleRng> {
    board: Board,
    snake: Snake,
    rng: R,
    feed_factor: usize,
    food_eaten: u32,
}

impl<R: RandomSource> GameManager<R> {
    /// Create a game from a level description with the default growth factor
    pub fn new(level: &str, rng: R) -> Result<Self> {
        Self::with_feed_factor(level, rng, FEED_FACTOR)
    }

    /// Create a game from a level description
    ///
    /// `feed_factor` is both the starting length and the growth per food; values
    /// below 1 are raised to 1.
    pub fn with_feed_factor(level: &str, rng: R, feed_factor: usize) -> Result<Self> {
        let board = Board::parse(level)?;
        Self::from_board(board, rng, feed_factor)
    }

    /// Read a level file and create a game from it
    pub fn from_level_file(path: impl AsRef<Path>, rng: R) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::new(&text, rng)
    }

    /// Place the snake and the first food on a prepared board
    pub fn from_board(mut board: Board, mut rng: R, feed_factor: usize) -> Result<Self> {
        let feed_factor = feed_factor.max(1);

        let start = board.find_open_coordinate(&mut rng)?;
        board.set(start, TileState::Player);
        let snake = Snake::new(start, feed_factor);

        let mut game = Self {
            board,
            snake,
            rng,
            feed_factor,
            food_eaten: 0,
        };
        let food = game.spawn_food()?;
        info!(
            "new game on {}x{} board: snake at ({}, {}), food at ({}, {})",
            game.width(),
            game.height(),
            start.x,
            start.y,
            food.x,
            food.y
        );
        Ok(game)
    }

    /// Put a food tile on a random empty cell
    pub fn spawn_food(&mut self) -> Result<Point> {
        let pos = self.board.find_open_coordinate(&mut self.rng)?;
        self.board.set(pos, TileState::Food);
        Ok(pos)
    }

    /// Turn the snake; returns whether the heading changed
    pub fn turn(&mut self, dir: Direction) -> bool {
        let turned = self.snake.turn(dir);
        if turned {
            debug!("snake has turned {dir}");
        }
        turned
    }

    /// Advance the game by one tick
    ///
    /// Returns `Ok(true)` while the snake lives and `Ok(false)` once it has left
    /// the board or hit a wall or itself. A dead snake is never moved again.
    /// `Err(BoardFull)` means the snake ate and no cell is left for new food.
    pub fn update(&mut self) -> Result<bool> {
        if !self.snake.is_alive() {
            return Ok(false);
        }

        // The tail vacates its cell; if stacked segments remain there the redraw
        // below marks it again.
        self.board.set(self.snake.tail(), TileState::Empty);
        self.snake.step();

        let head = self.snake.head();
        if !self.board.contains(head) {
            debug!("snake has gone out of bounds at ({}, {})", head.x, head.y);
            return Ok(self.kill());
        }

        let ate = match self.board.get(head) {
            TileState::Wall => {
                debug!("snake has run into a wall");
                return Ok(self.kill());
            }
            TileState::Player => {
                debug!("snake has run into itself");
                return Ok(self.kill());
            }
            _ if self.bites_own_body() => {
                debug!("snake has run into itself");
                return Ok(self.kill());
            }
            TileState::Food => true,
            TileState::Empty => false,
        };

        if ate {
            self.snake.feed(self.feed_factor);
            self.food_eaten += 1;
            debug!("Yum! length is now {}", self.snake.len());
        }

        for &segment in self.snake.segments() {
            self.board.set(segment, TileState::Player);
        }

        if ate {
            self.spawn_food()?;
        }
        Ok(true)
    }

    /// Head sharing a cell with another segment while moving
    ///
    /// Catches the stacked tail left by growth, which the board shows as Empty
    /// right after the tail clear.
    fn bites_own_body(&self) -> bool {
        if self.snake.heading().is_still() {
            return false;
        }
        let head = self.snake.head();
        self.snake.segments()[1..].contains(&head)
    }

    fn kill(&mut self) -> bool {
        self.snake.die();
        info!(
            "game over: length {}, food eaten {}",
            self.snake.len(),
            self.food_eaten
        );
        false
    }

    /// Tile at column `x`, row `y` (the board's `[y][x]` entry)
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the board.
    pub fn state(&self, x: i32, y: i32) -> TileState {
        self.board.get(Point::new(x, y))
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn is_alive(&self) -> bool {
        self.snake.is_alive()
    }

    pub fn feed_factor(&self) -> usize {
        self.feed_factor
    }

    /// Food tiles eaten so far (the score)
    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    /// Text picture of the board (see [`Board::render`])
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Give back the random source, e.g. to seed the next round
    pub fn into_rng(self) -> R {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_snake_survives_ticks() {
        let mut game = GameManager::new("6 6", SimpleRng::new(5)).unwrap();
        let head = game.snake().head();
        for _ in 0..10 {
            assert!(game.update().unwrap());
        }
        assert_eq!(game.snake().head(), head);
        assert_eq!(game.board().count(TileState::Player), 1);
        assert_eq!(game.board().count(TileState::Food), 1);
    }

    #[test]
    fn test_feed_factor_is_clamped() {
        let game = GameManager::with_feed_factor("4 4", SimpleRng::new(1), 0).unwrap();
        assert_eq!(game.feed_factor(), 1);
        assert_eq!(game.snake().len(), 1);
    }

    #[test]
    fn test_update_after_death_is_noop() {
        let mut game = GameManager::new("1 3", SimpleRng::new(2)).unwrap();
        let dir = if game.snake().head().y == 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        game.turn(dir);
        while game.update().unwrap() {}
        assert!(!game.is_alive());

        let picture = game.render();
        assert!(!game.update().unwrap());
        assert_eq!(game.render(), picture);
    }
}
