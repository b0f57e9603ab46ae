//! Runtime configuration read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NIBBLES_LEVEL` | built-in `maze-zigzag.txt` |
//! | `NIBBLES_TICK_MS` | 200 |
//! | `NIBBLES_SEED` | derived from the clock |
//! | `NIBBLES_FEED_FACTOR` | 5 |
//! | `NIBBLES_LOG_PATH` | unset (no log file) |
//! | `NIBBLES_LOG_LEVEL` | `info` |
//! | `NIBBLES_DEBUG` | unset; `1` or `true` logs at debug level |

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::types::{FEED_FACTOR, TICK_MS};

/// The level that ships with the game
pub const DEFAULT_LEVEL_TEXT: &str = include_str!("../levels/maze-zigzag.txt");

/// Where the level description comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSource {
    /// The built-in default level
    Builtin,
    File(PathBuf),
}

impl LevelSource {
    /// Read the level text
    pub fn load(&self) -> Result<String> {
        match self {
            LevelSource::Builtin => Ok(DEFAULT_LEVEL_TEXT.to_string()),
            LevelSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("reading level {}", path.display())),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub level: LevelSource,
    pub tick_ms: u32,
    pub seed: u32,
    pub feed_factor: usize,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: LevelSource::Builtin,
            tick_ms: TICK_MS,
            seed: 1,
            feed_factor: FEED_FACTOR,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if std::env::var_os("NIBBLES_SEED").is_none() {
            config.seed = clock_seed();
        }
        config
    }

    /// Create from an arbitrary variable lookup
    ///
    /// Unparsable numbers fall back to their defaults. Without `NIBBLES_SEED` the
    /// seed stays at the fixed default.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let level = var("NIBBLES_LEVEL")
            .map(|p| LevelSource::File(PathBuf::from(p)))
            .unwrap_or(defaults.level);

        let tick_ms = var("NIBBLES_TICK_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = var("NIBBLES_SEED")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.seed);

        let feed_factor = var("NIBBLES_FEED_FACTOR")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.max(1))
            .unwrap_or(defaults.feed_factor);

        let log_path = var("NIBBLES_LOG_PATH").map(PathBuf::from);

        let debug = var("NIBBLES_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let log_level = if debug {
            LevelFilter::Debug
        } else {
            var("NIBBLES_LOG_LEVEL")
                .and_then(|s| s.parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level)
        };

        Self {
            level,
            tick_ms,
            seed,
            feed_factor,
            log_path,
            log_level,
        }
    }

    /// Use a level file given on the command line instead of the configured one
    pub fn with_level_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.level = LevelSource::File(PathBuf::from(path));
        }
        self
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
