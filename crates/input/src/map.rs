//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, vi keys (`hjkl`) and `wasd` steer; `p` pauses; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Actions
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(dir: Direction) -> Option<GameAction> {
        Some(GameAction::Turn(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), turn(Direction::Right));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('S'))), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), turn(Direction::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_control_chords_are_not_actions() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
