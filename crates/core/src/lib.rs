//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the game. It has **no dependencies**
//! on terminals, input devices, or timers, making it:
//!
//! - **Deterministic**: the same seed and the same turns produce the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: any front end can drive it through [`GameManager`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size tile grid with bounded random open-cell search
//! - [`level`]: parser for the `width height` + wall rectangle level format
//! - [`snake`]: body segments, heading, growth and follow-the-leader movement
//! - [`game`]: spawning and the per-tick update/collision algorithm
//! - [`rng`]: injectable random source and a seeded LCG
//! - [`error`]: level and game errors
//!
//! # Game Rules
//!
//! - The snake starts as `feed_factor` (default 5) stacked segments, standing still
//! - Turning back along the current axis is ignored
//! - Eating food grows the snake by `feed_factor` and spawns a new food
//! - Leaving the board, hitting a wall, or biting itself ends the game
//!
//! # Example
//!
//! ```
//! use nibbles_core::{GameManager, SimpleRng};
//! use nibbles_core::types::{Direction, TileState};
//!
//! let mut game = GameManager::new("8 8\n0 0 7 0\n", SimpleRng::new(12345)).unwrap();
//! assert_eq!(game.board().count(TileState::Food), 1);
//!
//! game.turn(Direction::Down);
//! let alive = game.update().unwrap();
//! assert_eq!(alive, game.is_alive());
//! ```
//!
//! # Timing
//!
//! The core has no clock. Front ends call [`GameManager::update`] once per tick
//! (200ms by default, see [`types::TICK_MS`]) and [`GameManager::turn`] between ticks.

pub mod board;
pub mod error;
pub mod game;
pub mod level;
pub mod rng;
pub mod snake;

pub use nibbles_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{GameError, LevelError};
pub use game::GameManager;
pub use rng::{RandomSource, SimpleRng};
pub use snake::Snake;
