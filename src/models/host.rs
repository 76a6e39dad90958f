use std::path::PathBuf;

/// The file the user is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    pub path: PathBuf,
    /// The in-memory buffer differs from what is on disk.
    pub dirty: bool,
    /// The file is shown in at least one editor pane.
    pub visible: bool,
}

impl ActiveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dirty: false,
            visible: false,
        }
    }

    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Read-only view of the host captured once when a move starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    /// Workspace roots in the order the host reports them.
    pub roots: Vec<PathBuf>,
    pub active_file: Option<ActiveFile>,
}

impl HostSnapshot {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            active_file: None,
        }
    }

    pub fn with_active_file(mut self, file: ActiveFile) -> Self {
        self.active_file = Some(file);
        self
    }
}
