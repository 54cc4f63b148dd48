//! Key mapping from terminal key codes to actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical form of a key code so press and release of the same physical key
/// compare equal (shift may change the reported letter case in between).
pub fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Map a key to the action it is bound to.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match normalize_key(code) {
        // Movement
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),

        // Debug actions
        KeyCode::Char('x') => Some(Action::Fade),
        KeyCode::Char('b') => Some(Action::PlantRoses),
        KeyCode::Char('t') => Some(Action::PlantTree),
        KeyCode::Char('w') => Some(Action::PaintWater),
        KeyCode::Char('d') => Some(Action::PaintDirt),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

/// Check if the key should end the session regardless of game state (Ctrl+C).
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
