//! Nibbles: a terminal Snake game on text-defined maze levels.
//!
//! This package is a facade over the workspace crates plus the runtime glue used
//! by the `nibbles` binary (configuration and logging).

pub mod config;
pub mod logging;

pub use nibbles_core as core;
pub use nibbles_input as input;
pub use nibbles_term as term;
pub use nibbles_types as types;

pub use config::{GameConfig, LevelSource, DEFAULT_LEVEL_TEXT};
