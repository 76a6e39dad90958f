//! Interactive folder picker drawn with ratatui.

use std::path::PathBuf;

use async_trait::async_trait;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tracing::debug;

use crate::input::{apply_command, KeybindingConfig, PickerFlow};
use crate::models::FolderPickItem;
use crate::state::FolderPickerState;
use crate::terminal::{is_interactive, PickerTerminal, TerminalManager};
use crate::traits::{FolderPicker, PickerError};
use crate::ui::render_folder_picker;

/// Modal picker on the controlling terminal.
///
/// Takes over the alternate screen on stderr for the duration of
/// [`FolderPicker::pick`] and restores it on every exit path.
#[derive(Debug, Clone, Default)]
pub struct TuiFolderPicker {
    /// Name of the file being moved, shown in the dialog title
    subject: String,
    keybindings: KeybindingConfig,
}

impl TuiFolderPicker {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            keybindings: KeybindingConfig::new(),
        }
    }
}

#[async_trait]
impl FolderPicker for TuiFolderPicker {
    async fn pick(&self, items: &[FolderPickItem]) -> Result<Option<PathBuf>, PickerError> {
        if !is_interactive() {
            return Err(PickerError::NotInteractive);
        }

        debug!(candidates = items.len(), "Opening folder picker");
        let mut state = FolderPickerState::new(items.to_vec());
        let mut manager = TerminalManager::new()?;

        let result = run_picker(
            manager.terminal(),
            &mut state,
            &self.keybindings,
            &self.subject,
        )
        .await;

        manager.restore()?;
        debug!(selected = ?result.as_ref().ok().and_then(|p| p.as_ref()), "Folder picker closed");
        result
    }
}

/// Draw, read one event, apply it; until the user confirms or dismisses.
async fn run_picker(
    terminal: &mut PickerTerminal,
    state: &mut FolderPickerState,
    keybindings: &KeybindingConfig,
    subject: &str,
) -> Result<Option<PathBuf>, PickerError> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| render_folder_picker(f, state, subject))?;

        let Some(event) = events.next().await else {
            // Input closed underneath us
            return Ok(None);
        };

        match event? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = keybindings.resolve(&key) {
                    match apply_command(state, command) {
                        PickerFlow::Continue => {}
                        PickerFlow::Selected(path) => return Ok(Some(path)),
                        PickerFlow::Cancelled => return Ok(None),
                    }
                }
            }
            Event::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    state.push_char(c);
                }
            }
            Event::FocusLost => {
                debug!("Picker lost focus; staying open");
            }
            // Resize and everything else just trigger a redraw
            _ => {}
        }
    }
}
