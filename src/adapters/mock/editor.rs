//! In-memory editor host for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{EditorHost, HostError};

/// One recorded call on [`InMemoryEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCall {
    Save(PathBuf),
    Focus(PathBuf),
    CloseActive,
    WaitClosed(PathBuf),
    Open(PathBuf),
}

/// Editor host that keeps unsaved buffers in memory.
///
/// `save` writes the buffer registered for a path to disk, so tests can
/// check that edits made before a move end up at the new location.
///
/// # Example
///
/// ```ignore
/// use relocate::adapters::mock::{EditorCall, InMemoryEditor};
///
/// let editor = InMemoryEditor::new();
/// editor.set_buffer("/proj/notes.md", "draft");
/// editor.set_close_should_fail(true);
/// // ... run a move ...
/// assert_eq!(editor.calls()[0], EditorCall::Save("/proj/notes.md".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEditor {
    /// Unsaved contents by path
    buffers: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// Every call in order
    calls: Arc<Mutex<Vec<EditorCall>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether close_active should fail
    close_should_fail: Arc<Mutex<bool>>,
    /// Whether open should fail
    open_should_fail: Arc<Mutex<bool>>,
    /// Whether wait_closed never resolves
    close_hangs: Arc<Mutex<bool>>,
}

impl InMemoryEditor {
    /// Create an editor with no buffers and no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register unsaved contents for `path`.
    pub fn set_buffer(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.buffers
            .lock()
            .unwrap()
            .insert(path.into(), contents.into());
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether close_active should fail.
    pub fn set_close_should_fail(&self, should_fail: bool) {
        *self.close_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether open should fail.
    pub fn set_open_should_fail(&self, should_fail: bool) {
        *self.open_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether wait_closed hangs forever.
    pub fn set_close_hangs(&self, hangs: bool) {
        *self.close_hangs.lock().unwrap() = hangs;
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<EditorCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: EditorCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EditorHost for InMemoryEditor {
    async fn save(&self, path: &Path) -> Result<(), HostError> {
        self.record(EditorCall::Save(path.to_path_buf()));
        let should_fail = *self.save_should_fail.lock().unwrap();
        if should_fail {
            return Err(HostError::Other("Mock save failure".to_string()));
        }

        let contents = self.buffers.lock().unwrap().remove(path);
        if let Some(contents) = contents {
            tokio::fs::write(path, contents)
                .await
                .map_err(|e| HostError::Other(e.to_string()))?;
        }
        Ok(())
    }

    async fn focus(&self, path: &Path) -> Result<(), HostError> {
        self.record(EditorCall::Focus(path.to_path_buf()));
        Ok(())
    }

    async fn close_active(&self) -> Result<(), HostError> {
        self.record(EditorCall::CloseActive);
        if *self.close_should_fail.lock().unwrap() {
            return Err(HostError::Other("Mock close failure".to_string()));
        }
        Ok(())
    }

    async fn wait_closed(&self, path: &Path, _settle: Duration) {
        self.record(EditorCall::WaitClosed(path.to_path_buf()));
        let hangs = *self.close_hangs.lock().unwrap();
        if hangs {
            std::future::pending::<()>().await;
        }
    }

    async fn open(&self, path: &Path) -> Result<(), HostError> {
        self.record(EditorCall::Open(path.to_path_buf()));
        if *self.open_should_fail.lock().unwrap() {
            return Err(HostError::NotOpen(path.to_path_buf()));
        }
        Ok(())
    }
}
