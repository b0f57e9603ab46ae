//! GameView: maps a `core::GameManager` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameManager, RandomSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TileState;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Message drawn across the middle of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Paused,
    GameOver,
    /// The snake filled every free cell
    BoardFull,
}

impl Overlay {
    fn lines(&self) -> &'static [&'static str] {
        match self {
            Overlay::None => &[],
            Overlay::Paused => &["PAUSED", "p to resume"],
            Overlay::GameOver => &["GAME OVER", "r restart  q quit"],
            Overlay::BoardFull => &["BOARD CLEARED", "r restart  q quit"],
        }
    }
}

const EMPTY_STYLE: CellStyle = CellStyle::new(Rgb::new(60, 60, 70), Rgb::new(20, 20, 28));
const WALL_STYLE: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(110, 110, 120));
const SNAKE_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(200, 40, 40));
const HEAD_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(240, 90, 60)).bold();
const FOOD_STYLE: CellStyle = CellStyle::new(Rgb::new(40, 220, 80), Rgb::new(20, 20, 28)).bold();
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const TEXT_STYLE: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0));
const BANNER_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 80), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into a fresh framebuffer sized to `viewport`.
    pub fn render<R: RandomSource>(
        &self,
        game: &GameManager<R>,
        overlay: Overlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, overlay, viewport, &mut fb);
        fb
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Layout: a status line on row 0, then the bordered board centred below it.
    /// Boards larger than the viewport are clipped at the right and bottom.
    pub fn render_into<R: RandomSource>(
        &self,
        game: &GameManager<R>,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        // Cells past u16 columns or rows can never reach the terminal.
        let cols = u16::try_from(game.width()).unwrap_or(u16::MAX);
        let rows = u16::try_from(game.height()).unwrap_or(u16::MAX);
        let board_w = cols.saturating_mul(self.cell_w);
        let board_h = rows;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = 1 + viewport.height.saturating_sub(frame_h + 1) / 2;

        let status = format!(
            "Score: {}  Length: {}",
            game.food_eaten(),
            game.snake().len()
        );
        fb.put_str(start_x, 0, &status, TEXT_STYLE);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let head = game.snake().head();
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = match game.state(i32::from(x), i32::from(y)) {
                    TileState::Player if head.x == i32::from(x) && head.y == i32::from(y) => {
                        ('@', HEAD_STYLE)
                    }
                    TileState::Player => ('o', SNAKE_STYLE),
                    TileState::Wall => (' ', WALL_STYLE),
                    TileState::Food => ('*', FOOD_STYLE),
                    TileState::Empty => ('·', EMPTY_STYLE),
                };
                let px = (start_x + 1).saturating_add(x.saturating_mul(self.cell_w));
                let py = (start_y + 1).saturating_add(y);
                fb.set(px, py, style.into_cell(ch));
                for dx in 1..self.cell_w {
                    fb.set(px.saturating_add(dx), py, style.into_cell(' '));
                }
            }
        }

        let lines = overlay.lines();
        let mid_y = start_y + frame_h / 2;
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(len) / 2;
            let y = (mid_y + i as u16).saturating_sub(lines.len() as u16 / 2);
            fb.put_str(x, y, line, BANNER_STYLE);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        fb.fill_rect(x + 1, y, w - 2, 1, '─', BORDER_STYLE);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', BORDER_STYLE);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', BORDER_STYLE);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', BORDER_STYLE);
        fb.set(x, y, BORDER_STYLE.into_cell('┌'));
        fb.set(right, y, BORDER_STYLE.into_cell('┐'));
        fb.set(x, bottom, BORDER_STYLE.into_cell('└'));
        fb.set(right, bottom, BORDER_STYLE.into_cell('┘'));
    }
}
