//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(GameAction::NewGame),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
