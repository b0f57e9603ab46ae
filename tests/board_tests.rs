//! Board and level parsing tests

use nibbles::core::{level, Board, GameError, LevelError, SimpleRng};
use nibbles::types::{Point, TileState};
use nibbles::DEFAULT_LEVEL_TEXT;

mod common;
use common::ScriptedRng;

#[test]
fn test_parse_dimensions_and_walls() {
    let board = Board::parse("6 4\n0 0 5 0\n2 1 3 2\n").unwrap();
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 4);
    assert_eq!(
        board.render(),
        "XXXXXX\n\
         ..XX..\n\
         ..XX..\n\
         ......\n"
    );
}

#[test]
fn test_parse_missing_header() {
    assert_eq!(level::parse(""), Err(LevelError::MissingDimensions));
    assert_eq!(level::parse("7"), Err(LevelError::MissingDimensions));
}

#[test]
fn test_parse_zero_dimension() {
    assert_eq!(
        level::parse("0 5"),
        Err(LevelError::ZeroDimension {
            width: 0,
            height: 5
        })
    );
    assert!(matches!(
        level::parse("5 0\n0 0 1 1"),
        Err(LevelError::ZeroDimension { .. })
    ));
}

#[test]
fn test_parse_oversized_dimensions() {
    assert_eq!(
        level::parse("4294967296 4294967296"),
        Err(LevelError::TooLarge {
            width: 4294967296,
            height: 4294967296
        })
    );
    assert!(matches!(
        level::parse("2147483648 1"),
        Err(LevelError::TooLarge { .. })
    ));
    assert!(matches!(
        level::parse("3000000000 3000000000"),
        Err(LevelError::TooLarge { .. })
    ));
}

#[test]
fn test_parse_invalid_numbers() {
    assert_eq!(
        level::parse("five 5"),
        Err(LevelError::InvalidNumber {
            line: 1,
            token: "five".to_string()
        })
    );
    assert_eq!(
        level::parse("5 5\n0 0 1 1\n0 -1 2 2"),
        Err(LevelError::InvalidNumber {
            line: 3,
            token: "-1".to_string()
        })
    );
}

#[test]
fn test_parse_extra_header_tokens_ignored() {
    let board = Board::parse("3 2 whatever\n").unwrap();
    assert_eq!((board.width(), board.height()), (3, 2));
}

#[test]
fn test_parse_skips_lines_without_four_tokens() {
    let board = Board::parse("4 4\n\n0 0 3 3 9\n1 1\nnot a rect\n1 1 1 1\n").unwrap();
    assert_eq!(board.count(TileState::Wall), 1);
    assert_eq!(board.get(Point::new(1, 1)), TileState::Wall);
}

#[test]
fn test_parse_wall_outside_board() {
    assert_eq!(
        level::parse("4 4\n0 0 4 0"),
        Err(LevelError::WallOutOfBounds {
            line: 2,
            x2: 4,
            y2: 0,
            width: 4,
            height: 4
        })
    );
}

#[test]
fn test_default_level() {
    let board = Board::parse(DEFAULT_LEVEL_TEXT).unwrap();
    assert_eq!((board.width(), board.height()), (40, 24));
    // Closed border plus three zigzag bars of 28 cells.
    assert_eq!(board.count(TileState::Wall), 124 + 3 * 28);
    for x in 0..40 {
        assert_eq!(board.get(Point::new(x, 0)), TileState::Wall);
        assert_eq!(board.get(Point::new(x, 23)), TileState::Wall);
    }
    assert_eq!(board.get(Point::new(29, 6)), TileState::Empty);
    assert_eq!(board.get(Point::new(10, 12)), TileState::Empty);
}

#[test]
fn test_board_contains() {
    let board = Board::new(3, 2);
    assert!(board.contains(Point::new(0, 0)));
    assert!(board.contains(Point::new(2, 1)));
    assert!(!board.contains(Point::new(3, 0)));
    assert!(!board.contains(Point::new(0, 2)));
    assert!(!board.contains(Point::new(-1, 1)));
    assert_eq!(board.try_get(Point::new(0, -1)), None);
}

#[test]
#[should_panic]
fn test_board_set_out_of_bounds_panics() {
    let mut board = Board::new(3, 3);
    board.set(Point::new(-1, 0), TileState::Wall);
}

#[test]
fn test_open_coordinate_uses_x_then_y() {
    let board = Board::new(5, 5);
    let mut rng = ScriptedRng::new(&[3, 1]);
    assert_eq!(board.find_open_coordinate(&mut rng).unwrap(), Point::new(3, 1));
}

#[test]
fn test_open_coordinate_retries_until_empty() {
    let board = Board::from_picture("X.\n..").unwrap();
    let mut rng = ScriptedRng::new(&[0, 0, 0, 0, 1, 1]);
    assert_eq!(board.find_open_coordinate(&mut rng).unwrap(), Point::new(1, 1));
}

#[test]
fn test_open_coordinate_falls_back_to_scan() {
    // A source stuck on (0, 0), which is a wall, still finds the one open cell.
    let board = Board::from_picture("XXX\nXX.\nXXX").unwrap();
    let mut rng = ScriptedRng::new(&[]);
    assert_eq!(board.find_open_coordinate(&mut rng).unwrap(), Point::new(2, 1));
}

#[test]
fn test_open_coordinate_on_full_board() {
    let board = Board::from_picture("XS\nfX").unwrap();
    let mut rng = SimpleRng::new(9);
    assert!(matches!(
        board.find_open_coordinate(&mut rng),
        Err(GameError::BoardFull)
    ));
}

#[test]
fn test_open_coordinate_is_always_empty() {
    let board = Board::parse(DEFAULT_LEVEL_TEXT).unwrap();
    let mut rng = SimpleRng::new(2024);
    for _ in 0..500 {
        let pos = board.find_open_coordinate(&mut rng).unwrap();
        assert_eq!(board.get(pos), TileState::Empty);
    }
}
