//! Commands understood by the folder picker.
//!
//! Keys are mapped to a [`Command`] first and only then applied to the
//! picker state, so key bindings stay separate from their effects.

/// Represents every action the folder picker can take in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a character to the query
    InsertChar(char),
    /// Delete the last query character (Backspace)
    DeleteChar,
    /// Clear the whole query (Ctrl+U)
    ClearQuery,
    /// Move the cursor up (Up, Ctrl+P)
    MoveUp,
    /// Move the cursor down (Down, Ctrl+N)
    MoveDown,
    /// Jump a page up (PageUp)
    PageUp,
    /// Jump a page down (PageDown)
    PageDown,
    /// Choose the highlighted folder (Enter)
    Confirm,
    /// Dismiss without choosing (Esc, Ctrl+C)
    Cancel,
}
