//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action. Unrecognized keys map to `None` and
/// are ignored by the engine.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') => Some(GameAction::Jump),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameAction::Quit)
        }
        _ => None,
    }
}
