//! Terminal Snake runner (default binary).
//!
//! Loads the level, then drives the core with crossterm input and a fixed tick.
//! Usage: `nibbles [LEVEL_FILE]` (see `config` for the environment variables).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use nibbles::core::{GameError, GameManager, SimpleRng};
use nibbles::input::{handle_key_event, should_quit};
use nibbles::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use nibbles::types::{GameAction, DEFAULT_LEVEL};
use nibbles::{logging, GameConfig, LevelSource};

fn main() -> Result<()> {
    let config = GameConfig::from_env().with_level_arg(std::env::args().nth(1));
    logging::init(&config)?;

    let level = config.level.load()?;
    // Fail on a bad level before the terminal switches to raw mode.
    let game = GameManager::with_feed_factor(
        &level,
        SimpleRng::new(config.seed),
        config.feed_factor,
    )?;
    match &config.level {
        LevelSource::Builtin => info!("starting on built-in {DEFAULT_LEVEL}, seed {}", config.seed),
        LevelSource::File(path) => info!("starting on {}, seed {}", path.display(), config.seed),
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &level, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    level: &str,
    mut game: GameManager,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut overlay = Overlay::None;

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    // One turn per tick, so two quick turns cannot fold the head back onto the neck.
    let mut turned_this_tick = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameAction::Turn(dir)) => {
                            if overlay == Overlay::None && !turned_this_tick {
                                turned_this_tick = game.turn(dir);
                            }
                        }
                        Some(GameAction::Pause) => {
                            overlay = match overlay {
                                Overlay::None => Overlay::Paused,
                                Overlay::Paused => Overlay::None,
                                other => other,
                            };
                        }
                        Some(GameAction::Restart) => {
                            let rng = game.into_rng();
                            game = GameManager::with_feed_factor(level, rng, config.feed_factor)?;
                            overlay = Overlay::None;
                            turned_this_tick = false;
                            last_tick = Instant::now();
                            info!("restarted");
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            turned_this_tick = false;

            if overlay == Overlay::None {
                overlay = match game.update() {
                    Ok(true) => Overlay::None,
                    Ok(false) => Overlay::GameOver,
                    Err(GameError::BoardFull) => {
                        info!("board cleared with score {}", game.food_eaten());
                        Overlay::BoardFull
                    }
                    Err(e) => return Err(e.into()),
                };
            }
        }
    }
}
