//! Keyboard handling for the folder picker.
//!
//! ```text
//! KeyEvent -> KeybindingConfig::resolve() -> Command -> apply_command() -> FolderPickerState
//! ```

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};

use std::path::PathBuf;

use crate::state::FolderPickerState;

/// What the picker loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerFlow {
    /// Keep prompting
    Continue,
    /// The user chose this folder
    Selected(PathBuf),
    /// The user dismissed the picker
    Cancelled,
}

/// Apply a command to the picker state.
///
/// Confirming with nothing highlighted (no matches) keeps the picker open.
pub fn apply_command(state: &mut FolderPickerState, command: Command) -> PickerFlow {
    match command {
        Command::InsertChar(c) => state.push_char(c),
        Command::DeleteChar => state.pop_char(),
        Command::ClearQuery => state.clear_query(),
        Command::MoveUp => state.move_up(),
        Command::MoveDown => state.move_down(),
        Command::PageUp => state.page_up(),
        Command::PageDown => state.page_down(),
        Command::Confirm => {
            return match state.selected_path() {
                Some(path) => PickerFlow::Selected(path),
                None => PickerFlow::Continue,
            }
        }
        Command::Cancel => return PickerFlow::Cancelled,
    }
    PickerFlow::Continue
}
