//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCcw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') if !is_ctrl(key) => Some(GameAction::Hold),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Presses and repeats produce intents; releases do not.
pub fn is_intent_event(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && is_ctrl(key))
}

fn is_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}
