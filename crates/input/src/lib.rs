//! Terminal input module.
//!
//! This module is independent of any particular front end. It maps `crossterm`
//! key events into [`crate::types::GameAction`] values and recognises the quit keys.

pub mod map;

pub use nibbles_types as types;

pub use map::{handle_key_event, should_quit};
