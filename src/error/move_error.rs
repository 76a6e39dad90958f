use std::path::PathBuf;

use thiserror::Error;

use super::system::SystemError;
use crate::traits::{HostError, PickerError};

/// Everything that can stop a move after the user asked for one.
///
/// Cancellation and "already there" are not errors; they are ordinary
/// [`crate::models::MoveOutcome`] variants.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("No active file to move.")]
    NoActiveFile,

    #[error("'{}' has no file name", .path.display())]
    InvalidPath { path: PathBuf },

    #[error("could not save '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: HostError,
    },

    #[error("could not close the editor for '{}': {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: HostError,
    },

    #[error("{source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: SystemError,
    },

    #[error("moved to '{}' but could not reopen it: {source}", .path.display())]
    Reopen {
        path: PathBuf,
        #[source]
        source: HostError,
    },

    #[error("{0}")]
    Picker(#[from] PickerError),
}

impl MoveError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            MoveError::Save { source, .. } | MoveError::Close { source, .. } => {
                source.user_message()
            }
            MoveError::Rename { source, .. } => source.user_message(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MoveError::NoActiveFile => "E_MOVE_NO_ACTIVE",
            MoveError::InvalidPath { .. } => "E_MOVE_PATH",
            MoveError::Save { .. } => "E_MOVE_SAVE",
            MoveError::Close { .. } => "E_MOVE_CLOSE",
            MoveError::Rename { .. } => "E_MOVE_RENAME",
            MoveError::Reopen { .. } => "E_MOVE_REOPEN",
            MoveError::Picker(_) => "E_MOVE_PICKER",
        }
    }
}

/// Type alias for Results using MoveError.
pub type MoveResult<T> = Result<T, MoveError>;
