//! File logging setup.
//!
//! The terminal belongs to the renderer, so log records go to the file named by
//! `NIBBLES_LOG_PATH` through `simplelog`. Without a path nothing is installed and
//! the `log` macros in the core are no-ops.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, WriteLogger};

use crate::config::GameConfig;

/// Install the file logger if configured. Returns whether a logger was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(config.log_level, Config::default(), file)
        .context("installing file logger")?;
    Ok(true)
}
