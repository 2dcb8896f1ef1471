//! Key mapping from terminal events to input actions.

use crate::types::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, before it is resolved against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    CursorLeft,
    CursorRight,
    /// Take one more card from the cursor column
    Deeper,
    /// Take one card fewer
    Shallower,
    /// Pick up the selected run, or drop the held one on the cursor column
    Select,
    Cancel,
    Deal,
    Undo,
    Redo,
    NewGame(Difficulty),
    Reset,
    ToggleSound,
    CycleLanguage,
}

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputAction::Undo),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(InputAction::Redo),
            _ => None,
        };
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(InputAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(InputAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputAction::Deeper),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(InputAction::Shallower),

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Select),
        KeyCode::Esc => Some(InputAction::Cancel),

        // Game
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Tab => Some(InputAction::Deal),
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => Some(InputAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Redo),
        KeyCode::Char('1') => Some(InputAction::NewGame(Difficulty::OneSuit)),
        KeyCode::Char('2') => Some(InputAction::NewGame(Difficulty::TwoSuits)),
        KeyCode::Char('4') => Some(InputAction::NewGame(Difficulty::FourSuits)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputAction::Reset),

        // Preferences
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::ToggleSound),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputAction::CycleLanguage),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
