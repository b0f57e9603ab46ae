//! Terminal rendering for the snake board.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws the board into a
//! plain framebuffer and [`TerminalRenderer`] flushes that framebuffer to the
//! terminal. Keeping the two apart keeps the view testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use nibbles_core as core;
pub use nibbles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
