//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of [`TileState`] fixed at construction.
//! Uses a flat vector in row-major order (`y * width + x`).
//! Coordinates: (x, y) where x is the column (left to right) and y the row (top to bottom).

use log::warn;

use crate::error::{GameError, Result};
use crate::level::{self, LevelError};
use crate::rng::RandomSource;
use crate::types::{tile_char, Point, TileState};

/// Random probes per cell before the open-cell search falls back to a scan
const PROBES_PER_CELL: usize = 4;

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<TileState>,
}

impl Board {
    /// Create an all-empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![TileState::Empty; width * height],
        }
    }

    /// Parse a level description (see [`crate::level`])
    pub fn parse(text: &str) -> std::result::Result<Self, LevelError> {
        level::parse(text)
    }

    /// Build a board from rows of debug characters, the inverse of [`Board::render`]
    ///
    /// Returns `None` for ragged rows or unknown characters.
    pub fn from_picture(picture: &str) -> Option<Self> {
        let rows: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first()?.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in &rows {
            if row.chars().count() != width {
                return None;
            }
            for ch in row.chars() {
                cells.push(TileState::from_char(ch)?);
            }
        }
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Calculate flat index from a point
    #[inline(always)]
    fn index(&self, pos: Point) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a point lies in `[0, width) x [0, height)`
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Get the tile at `pos`, or None if out of bounds
    pub fn try_get(&self, pos: Point) -> Option<TileState> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Get the tile at `pos`
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board. Callers bounds-check movement first.
    pub fn get(&self, pos: Point) -> TileState {
        match self.index(pos) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "board read at ({}, {}) outside {}x{}",
                pos.x, pos.y, self.width, self.height
            ),
        }
    }

    /// Set the tile at `pos`
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board.
    pub fn set(&mut self, pos: Point, state: TileState) {
        match self.index(pos) {
            Some(idx) => self.cells[idx] = state,
            None => panic!(
                "board write at ({}, {}) outside {}x{}",
                pos.x, pos.y, self.width, self.height
            ),
        }
    }

    /// Set every cell of the inclusive rectangle. Reversed corners mark nothing.
    ///
    /// # Panics
    ///
    /// If the far corner lies outside the board.
    pub fn fill_rect(&mut self, x1: usize, y1: usize, x2: usize, y2: usize, state: TileState) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set(Point::new(x as i32, y as i32), state);
            }
        }
    }

    /// Number of cells in the given state
    pub fn count(&self, state: TileState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Positions of every cell in the given state, row by row
    pub fn positions(&self, state: TileState) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == state)
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[TileState] {
        &self.cells
    }

    /// Pick a uniformly random Empty cell
    ///
    /// Probes random coordinates (x first, then y) until an Empty cell turns up.
    /// After `4 * width * height` misses it picks uniformly among the Empty cells
    /// instead, so a nearly full board still terminates.
    pub fn find_open_coordinate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Point> {
        let cells = self.width * self.height;
        if cells == 0 {
            return Err(GameError::BoardFull);
        }

        for _ in 0..cells.saturating_mul(PROBES_PER_CELL) {
            let x = rng.next_range(self.width as u32) as i32;
            let y = rng.next_range(self.height as u32) as i32;
            let pos = Point::new(x, y);
            if self.get(pos) == TileState::Empty {
                return Ok(pos);
            }
        }

        let open = self.count(TileState::Empty);
        if open == 0 {
            return Err(GameError::BoardFull);
        }
        warn!("random spawn probes exhausted, scanning {open} open cells");
        let pick = rng.next_range(open as u32) as usize;
        self.positions(TileState::Empty)
            .nth(pick)
            .ok_or(GameError::BoardFull)
    }

    /// Text picture of the board, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|&c| tile_char(c)));
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
