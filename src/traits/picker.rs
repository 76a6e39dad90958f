//! Folder picker trait abstraction.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::FolderPickItem;

/// Picker errors. Dismissing the picker is not one of them.
#[derive(Debug)]
pub enum PickerError {
    /// Terminal I/O failed while the picker was shown
    Terminal(std::io::Error),
    /// No interactive surface is available
    NotInteractive,
    /// Other error
    Other(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::Terminal(err) => write!(f, "Terminal IO error: {}", err),
            PickerError::NotInteractive => write!(f, "Not running in an interactive terminal"),
            PickerError::Other(msg) => write!(f, "Picker error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickerError::Terminal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        PickerError::Terminal(err)
    }
}

/// Modal single-choice folder selection.
///
/// Implementations block (asynchronously) until the user chooses or
/// dismisses. Dismissal is `Ok(None)`.
#[async_trait]
pub trait FolderPicker: Send + Sync {
    /// Let the user choose one of `items`; returns its `full_path`.
    async fn pick(&self, items: &[FolderPickItem]) -> Result<Option<PathBuf>, PickerError>;
}
