//! Editor host trait abstraction.
//!
//! The move flow needs a handful of editor primitives: flush a dirty buffer,
//! close the pane showing the file and open the file again afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SystemError;

/// Editor operation errors.
#[derive(Debug)]
pub enum HostError {
    /// Filesystem failure while acting on the document
    Io(SystemError),
    /// The document is not open in the host
    NotOpen(PathBuf),
    /// The host cannot perform the operation at all
    Unavailable(String),
    /// Other error
    Other(String),
}

impl HostError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            HostError::Io(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Io(err) => write!(f, "{}", err),
            HostError::NotOpen(path) => write!(f, "'{}' is not open", path.display()),
            HostError::Unavailable(msg) => write!(f, "Editor unavailable: {}", msg),
            HostError::Other(msg) => write!(f, "Editor error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SystemError> for HostError {
    fn from(err: SystemError) -> Self {
        HostError::Io(err)
    }
}

/// Editor primitives used around a move.
///
/// # Example
///
/// ```ignore
/// use relocate::traits::EditorHost;
///
/// async fn flush_and_close<E: EditorHost>(host: &E, path: &Path) -> Result<(), HostError> {
///     host.save(path).await?;
///     host.focus(path).await?;
///     host.close_active().await?;
///     host.wait_closed(path, Duration::from_millis(100)).await;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Write the in-memory buffer for `path` to disk.
    async fn save(&self, path: &Path) -> Result<(), HostError>;

    /// Bring the editor showing `path` to the front.
    async fn focus(&self, path: &Path) -> Result<(), HostError>;

    /// Close whichever editor currently has focus.
    async fn close_active(&self) -> Result<(), HostError>;

    /// Resolve once the editor for `path` has finished closing.
    ///
    /// Hosts without a completion signal keep this default, which waits for
    /// the fixed `settle` delay.
    async fn wait_closed(&self, _path: &Path, settle: Duration) {
        tokio::time::sleep(settle).await;
    }

    /// Open `path` and give it focus.
    async fn open(&self, path: &Path) -> Result<(), HostError>;
}
