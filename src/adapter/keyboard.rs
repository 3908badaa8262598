//! Terminal key events to calculator input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Token;

/// What a terminal key asks the interactive loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Input(Token),
    Quit,
}

/// Convert a keyboard event to a KeyAction
pub fn key_to_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char(c) => Token::from_char(c).map(KeyAction::Input),
        KeyCode::Enter => Some(KeyAction::Input(Token::Equals)),
        KeyCode::Backspace => Some(KeyAction::Input(Token::Delete)),
        KeyCode::Esc => Some(KeyAction::Input(Token::AllClear)),
        _ => None,
    }
}
