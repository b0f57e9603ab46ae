//! Level parsing - turns a maze description into a [`Board`]
//!
//! # Format
//!
//! ```text
//! <width> <height>
//! <x1> <y1> <x2> <y2>
//! <x1> <y1> <x2> <y2>
//! ...
//! ```
//!
//! The header needs at least two tokens; extra header tokens are ignored.
//! Each dimension must fit in an `i32`.
//! Every following line with exactly four tokens is an inclusive wall rectangle.
//! Lines with any other token count (blank lines included) are skipped.
//! Parsing ends at end of input.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::TileState;

pub use crate::error::LevelError;

/// Parse a level description into a board with its walls placed
///
/// # Examples
///
/// ```
/// use nibbles_core::level;
/// use nibbles_core::types::{Point, TileState};
///
/// let board = level::parse("4 3\n0 0 3 0\n").unwrap();
/// assert_eq!(board.width(), 4);
/// assert_eq!(board.get(Point::new(2, 0)), TileState::Wall);
/// assert_eq!(board.get(Point::new(2, 1)), TileState::Empty);
/// ```
pub fn parse(text: &str) -> Result<Board, LevelError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or(LevelError::MissingDimensions)?;
    let mut dims = header.split_whitespace();
    let (w, h) = match (dims.next(), dims.next()) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(LevelError::MissingDimensions),
    };
    let width = number(w, 1)?;
    let height = number(h, 1)?;
    if width == 0 || height == 0 {
        return Err(LevelError::ZeroDimension { width, height });
    }
    // Coordinates are i32 points.
    let max = i32::MAX as usize;
    if width > max || height > max || width.checked_mul(height).is_none() {
        return Err(LevelError::TooLarge { width, height });
    }

    let mut board = Board::new(width, height);
    for (idx, line) in lines {
        let line_no = idx + 1;
        let Some(tokens) = rect_tokens(line) else {
            continue;
        };

        let x1 = number(tokens[0], line_no)?;
        let y1 = number(tokens[1], line_no)?;
        let x2 = number(tokens[2], line_no)?;
        let y2 = number(tokens[3], line_no)?;

        let reversed = x1 > x2 || y1 > y2;
        if !reversed && (x2 >= width || y2 >= height) {
            return Err(LevelError::WallOutOfBounds {
                line: line_no,
                x2,
                y2,
                width,
                height,
            });
        }
        board.fill_rect(x1, y1, x2, y2, TileState::Wall);
    }

    Ok(board)
}

/// Split a rectangle line, or None when it does not have exactly four tokens
fn rect_tokens(line: &str) -> Option<ArrayVec<&str, 4>> {
    let mut tokens = ArrayVec::new();
    for token in line.split_whitespace() {
        tokens.try_push(token).ok()?;
    }
    tokens.is_full().then_some(tokens)
}

fn number(token: &str, line: usize) -> Result<usize, LevelError> {
    token.parse().map_err(|_| LevelError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
