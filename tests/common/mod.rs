//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let ws = TestWorkspace::new();
//! let file = ws.file("notes.md", "hello");
//! ws.dir("docs");
//! let harness = Harness::new(ScriptedPicker::choosing(ws.path("docs")));
//! let outcome = harness.run(&ws.snapshot(&file)).await;
//! ```

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use relocate::adapters::mock::{InMemoryEditor, RecordingNotifier, ScriptedPicker};
use relocate::config::MoveConfig;
use relocate::models::{ActiveFile, HostSnapshot, MoveOutcome};
use relocate::mover::MoveOrchestrator;
use tempfile::TempDir;

/// A throwaway project directory.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Create a file with contents, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// Single-root snapshot with `file` active.
    pub fn snapshot(&self, file: &Path) -> HostSnapshot {
        HostSnapshot::new(vec![self.root()]).with_active_file(ActiveFile::new(file))
    }
}

/// Orchestrator wired to mocks, with handles kept for assertions.
pub struct Harness {
    pub orchestrator: MoveOrchestrator<InMemoryEditor, ScriptedPicker, RecordingNotifier>,
    pub editor: InMemoryEditor,
    pub picker: ScriptedPicker,
    pub notifier: RecordingNotifier,
}

impl Harness {
    pub fn new(picker: ScriptedPicker) -> Self {
        let editor = InMemoryEditor::new();
        let notifier = RecordingNotifier::new();
        let config = MoveConfig::new().with_settle(Duration::from_millis(1));
        Self {
            orchestrator: MoveOrchestrator::new(
                editor.clone(),
                picker.clone(),
                notifier.clone(),
                config,
            ),
            editor,
            picker,
            notifier,
        }
    }

    pub async fn run(&self, snapshot: &HostSnapshot) -> MoveOutcome {
        self.orchestrator.run(snapshot).await
    }
}

/// Read a file to a string, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}
