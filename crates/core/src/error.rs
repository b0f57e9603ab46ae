//! Error types for level loading and game setup.

use std::fmt::{self, Display, Formatter};
use std::io;

/// Problems found while parsing a level description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The header line is absent or has fewer than two tokens
    MissingDimensions,
    /// Width or height is zero
    ZeroDimension { width: usize, height: usize },
    /// A dimension exceeds `i32::MAX` or the cell count overflows
    TooLarge { width: usize, height: usize },
    /// A token that should be a non-negative integer is not (line is 1-based)
    InvalidNumber { line: usize, token: String },
    /// A wall rectangle reaches outside the board
    WallOutOfBounds {
        line: usize,
        x2: usize,
        y2: usize,
        width: usize,
        height: usize,
    },
}

impl Display for LevelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MissingDimensions => {
                write!(f, "level header must give `width height`")
            }
            LevelError::ZeroDimension { width, height } => {
                write!(f, "level dimensions must be non-zero (got {width}x{height})")
            }
            LevelError::TooLarge { width, height } => {
                write!(f, "level dimensions {width}x{height} are too large")
            }
            LevelError::InvalidNumber { line, token } => {
                write!(f, "line {line}: `{token}` is not a non-negative integer")
            }
            LevelError::WallOutOfBounds {
                line,
                x2,
                y2,
                width,
                height,
            } => write!(
                f,
                "line {line}: wall corner ({x2}, {y2}) lies outside the {width}x{height} board"
            ),
        }
    }
}

impl std::error::Error for LevelError {}

/// Errors surfaced by [`crate::GameManager`]
#[derive(Debug)]
pub enum GameError {
    Level(LevelError),
    Io(io::Error),
    /// No empty cell is left to place the snake or a food tile
    BoardFull,
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Level(e) => write!(f, "invalid level: {e}"),
            GameError::Io(e) => write!(f, "could not read level: {e}"),
            GameError::BoardFull => write!(f, "no empty cell left on the board"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Level(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::BoardFull => None,
        }
    }
}

impl From<LevelError> for GameError {
    fn from(e: LevelError) -> Self {
        GameError::Level(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
