//! Default keybindings for the folder picker.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Key to command table for the picker.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::Cancel);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Cancel);

        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('p')), Command::MoveUp);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('n')), Command::MoveDown);
        bindings.insert(KeyCombo::plain(KeyCode::PageUp), Command::PageUp);
        bindings.insert(KeyCombo::plain(KeyCode::PageDown), Command::PageDown);

        bindings.insert(KeyCombo::plain(KeyCode::Backspace), Command::DeleteChar);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearQuery);

        Self { bindings }
    }

    /// Look up the command for a key event.
    ///
    /// Unbound printable characters (with or without Shift) become
    /// [`Command::InsertChar`].
    pub fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        if let Some(cmd) = self.bindings.get(&KeyCombo::new(key.code, key.modifiers)) {
            return Some(cmd.clone());
        }

        match key.code {
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
