//! Non-interactive picker for a destination given up front (`--to`).

use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::FolderPickItem;
use crate::traits::{FolderPicker, PickerError};
use crate::workspace::normalize_path;

/// Always answers with the same folder, without prompting.
///
/// The folder does not have to exist or be one of the offered candidates;
/// the move creates it.
#[derive(Debug, Clone)]
pub struct FixedFolderPicker {
    target: PathBuf,
}

impl FixedFolderPicker {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: normalize_path(&target.into()),
        }
    }
}

#[async_trait]
impl FolderPicker for FixedFolderPicker {
    async fn pick(&self, _items: &[FolderPickItem]) -> Result<Option<PathBuf>, PickerError> {
        Ok(Some(self.target.clone()))
    }
}
