//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Coordinates
//!
//! Board coordinates are `(x, y)` with `x` the column (left to right) and `y` the
//! row (top to bottom). Coordinates are signed so a snake head that walks off the
//! board can still be represented and bounds-checked.
//!
//! # Timing and Growth
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Default interval between snake steps |
//! | `FEED_FACTOR` | 5 | Initial length and growth per food |
//!
//! # Examples
//!
//! ```
//! use nibbles_types::{tile_char, Direction, GameAction, Point, TileState};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! let p = Point::new(2, 3).offset(dir.heading());
//! assert_eq!(p, Point::new(2, 2));
//!
//! assert_eq!(tile_char(TileState::Food), 'f');
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::Turn(Direction::Left)));
//! ```

/// Default tick interval in milliseconds
pub const TICK_MS: u32 = 200;

/// Number of segments a new snake starts with, and the growth per food eaten
pub const FEED_FACTOR: usize = 5;

/// File name of the level shipped with the game
pub const DEFAULT_LEVEL: &str = "maze-zigzag.txt";

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    /// Occupied by the snake
    Player,
    Wall,
    Food,
    #[default]
    Empty,
}

impl TileState {
    /// Parse a tile from its debug character (see [`tile_char`])
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(TileState::Player),
            'X' => Some(TileState::Wall),
            'f' => Some(TileState::Food),
            '.' => Some(TileState::Empty),
            _ => None,
        }
    }
}

/// Debug character for a tile: Player `S`, Wall `X`, Food `f`, Empty `.`
///
/// Kept apart from [`TileState`] so renderers can pick their own glyphs.
pub fn tile_char(state: TileState) -> char {
    match state {
        TileState::Player => 'S',
        TileState::Wall => 'X',
        TileState::Food => 'f',
        TileState::Empty => '.',
    }
}

/// A board coordinate (column `x`, row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point moved by the given heading
    pub fn offset(self, heading: Heading) -> Self {
        Self {
            x: self.x + heading.dx,
            y: self.y + heading.dy,
        }
    }

    /// True when `other` is the same cell or one orthogonal step away
    pub fn touches(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() <= 1
    }
}

/// Per-tick movement vector. At most one axis is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Heading {
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    /// Not moving (the heading of a freshly spawned snake)
    pub const STILL: Heading = Heading { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_still(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Turn commands accepted by the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use nibbles_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit heading for this direction; up is negative `y`
    pub fn heading(&self) -> Heading {
        match self {
            Direction::Up => Heading::new(0, -1),
            Direction::Down => Heading::new(0, 1),
            Direction::Left => Heading::new(-1, 0),
            Direction::Right => Heading::new(1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for Up/Down
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player commands, produced by input mapping and applied by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a new round on the same level
    Restart,
}

impl GameAction {
    /// Parse action from string ("up", "pause", "restart", ...)
    ///
    /// # Examples
    ///
    /// ```
    /// use nibbles_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Turn(Direction::Down)));
    /// assert_eq!(GameAction::from_str("Pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
