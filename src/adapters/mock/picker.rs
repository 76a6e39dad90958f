//! Picker with a preset answer.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::FolderPickItem;
use crate::traits::{FolderPicker, PickerError};

/// Answers every `pick` with the configured folder (or cancellation) and
/// remembers what it was offered.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    choice: Option<PathBuf>,
    should_fail: bool,
    offered: Arc<Mutex<Option<Vec<FolderPickItem>>>>,
}

impl ScriptedPicker {
    /// Picker that selects `folder`.
    pub fn choosing(folder: impl Into<PathBuf>) -> Self {
        Self {
            choice: Some(folder.into()),
            ..Self::default()
        }
    }

    /// Picker the user dismisses.
    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Picker that fails as if the terminal went away.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Items passed to the last `pick`, or `None` if it was never shown.
    pub fn offered(&self) -> Option<Vec<FolderPickItem>> {
        self.offered.lock().unwrap().clone()
    }
}

#[async_trait]
impl FolderPicker for ScriptedPicker {
    async fn pick(&self, items: &[FolderPickItem]) -> Result<Option<PathBuf>, PickerError> {
        *self.offered.lock().unwrap() = Some(items.to_vec());
        if self.should_fail {
            return Err(PickerError::NotInteractive);
        }
        Ok(self.choice.clone())
    }
}
