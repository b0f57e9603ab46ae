//! Snake module - body segments, heading, growth and movement
//!
//! The body is an ordered list of segments, head first. A new snake is
//! `feed_factor` segments stacked on one cell; it unfolds as it starts moving.
//! Growth appends segments on the tail cell, and the follow-the-leader step pulls
//! them out one per tick.

use crate::types::{Direction, Heading, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Segment positions, head at index 0
    body: Vec<Point>,
    heading: Heading,
    alive: bool,
}

impl Snake {
    /// Create a snake of `feed_factor` segments all at `pos`, standing still
    ///
    /// # Panics
    ///
    /// If `feed_factor` is zero; a snake always has a head.
    pub fn new(pos: Point, feed_factor: usize) -> Self {
        assert!(feed_factor > 0, "snake needs at least one segment");
        Self {
            body: vec![pos; feed_factor],
            heading: Heading::STILL,
            alive: true,
        }
    }

    /// Move one cell along the heading. Dead snakes stay put.
    ///
    /// Each segment takes its predecessor's old position (tail first), then the
    /// head advances.
    pub fn step(&mut self) {
        if !self.alive {
            return;
        }
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].offset(self.heading);
    }

    /// Change heading to `dir` unless that stays on the current axis of motion
    ///
    /// Up/Down are taken only while not moving vertically, Left/Right only while
    /// not moving horizontally, so the snake can never reverse into itself.
    /// Returns whether the heading changed.
    pub fn turn(&mut self, dir: Direction) -> bool {
        let blocked = if dir.is_vertical() {
            self.heading.dy != 0
        } else {
            self.heading.dx != 0
        };
        if blocked {
            return false;
        }
        self.heading = dir.heading();
        true
    }

    /// Grow by `amount` segments, stacked on the current tail
    pub fn feed(&mut self, amount: usize) {
        let tail = self.tail();
        self.body.extend(std::iter::repeat(tail).take(amount));
    }

    pub fn die(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Number of segments, including stacked ones
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segment positions, head first
    pub fn segments(&self) -> &[Point] {
        &self.body
    }

    /// True when every adjacent pair of segments shares a cell or an edge
    pub fn is_connected(&self) -> bool {
        self.body.windows(2).all(|w| w[0].touches(w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_stacked_and_still() {
        let snake = Snake::new(Point::new(2, 2), 5);
        assert_eq!(snake.len(), 5);
        assert!(snake.segments().iter().all(|&p| p == Point::new(2, 2)));
        assert!(snake.heading().is_still());
        assert!(snake.is_alive());
    }

    #[test]
    fn test_step_while_still_changes_nothing() {
        let mut snake = Snake::new(Point::new(1, 1), 3);
        let before = snake.clone();
        snake.step();
        assert_eq!(snake, before);
    }

    #[test]
    fn test_step_unfolds_stacked_body() {
        let mut snake = Snake::new(Point::new(0, 0), 3);
        snake.turn(Direction::Right);
        snake.step();
        assert_eq!(
            snake.segments(),
            &[Point::new(1, 0), Point::new(0, 0), Point::new(0, 0)]
        );
        snake.step();
        assert_eq!(
            snake.segments(),
            &[Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)]
        );
        snake.step();
        assert_eq!(
            snake.segments(),
            &[Point::new(3, 0), Point::new(2, 0), Point::new(1, 0)]
        );
    }

    #[test]
    fn test_turn_only_changes_axis() {
        let mut snake = Snake::new(Point::new(5, 5), 5);
        assert!(snake.turn(Direction::Right));
        assert!(!snake.turn(Direction::Left));
        assert!(!snake.turn(Direction::Right));
        assert_eq!(snake.heading(), Heading::new(1, 0));

        assert!(snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.heading(), Heading::new(0, -1));
    }

    #[test]
    fn test_dead_snake_does_not_move() {
        let mut snake = Snake::new(Point::new(0, 0), 2);
        snake.turn(Direction::Down);
        snake.die();
        snake.die();
        snake.step();
        assert!(!snake.is_alive());
        assert_eq!(snake.head(), Point::new(0, 0));
    }

    #[test]
    fn test_feed_stacks_on_tail() {
        let mut snake = Snake::new(Point::new(0, 0), 2);
        snake.turn(Direction::Right);
        snake.step();
        snake.feed(3);
        assert_eq!(snake.len(), 5);
        assert!(snake.segments()[1..].iter().all(|&p| p == Point::new(0, 0)));
        assert_eq!(snake.tail(), Point::new(0, 0));
    }
}
