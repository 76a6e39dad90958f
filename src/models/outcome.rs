use std::path::PathBuf;

use crate::error::MoveError;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown to the user once an invocation finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// How a move invocation ended. Exactly one per run.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The file now lives at `to`.
    Moved {
        from: PathBuf,
        to: PathBuf,
        /// Display label of the chosen folder
        label: String,
    },
    NoActiveFile,
    /// Enumeration produced no candidate folders.
    NoFolders,
    /// The picker was dismissed.
    Cancelled,
    /// The chosen folder already holds the file.
    AlreadyInPlace,
    Failed(MoveError),
}

impl MoveOutcome {
    /// Whether the binary should exit with a failure status.
    pub fn is_error(&self) -> bool {
        matches!(self, MoveOutcome::NoActiveFile | MoveOutcome::Failed(_))
    }

    /// The new path, if the file was moved.
    pub fn new_path(&self) -> Option<&PathBuf> {
        match self {
            MoveOutcome::Moved { to, .. } => Some(to),
            _ => None,
        }
    }
}
