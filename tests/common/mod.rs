//! Shared test helpers.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use nibbles::core::{GameManager, RandomSource};
use nibbles::types::{Point, TileState};

/// Random source that replays a fixed script, then yields zeros
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.values.pop_front().unwrap_or(0) % max
    }
}

/// Game on `level` with the snake placed at `snake` and the first food at `food`
pub fn scripted_game(level: &str, snake: (u32, u32), food: (u32, u32)) -> GameManager<ScriptedRng> {
    let rng = ScriptedRng::new(&[snake.0, snake.1, food.0, food.1]);
    GameManager::new(level, rng).expect("level should load")
}

/// Assert Player cells are exactly the snake's cells and there is one food
pub fn assert_board_matches_snake<R: RandomSource>(game: &GameManager<R>) {
    let players: HashSet<Point> = game.board().positions(TileState::Player).collect();
    let segments: HashSet<Point> = game.snake().segments().iter().copied().collect();
    assert_eq!(players, segments, "board:\n{}", game.render());
    assert_eq!(game.board().count(TileState::Food), 1, "board:\n{}", game.render());
}
