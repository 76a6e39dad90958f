use std::path::{Path, PathBuf};

/// One row of the folder picker.
///
/// The label is derived from `full_path` and the workspace roots; see
/// [`crate::workspace::resolve_label`]. Labels may collide in odd layouts,
/// full paths never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPickItem {
    pub label: String,
    pub full_path: PathBuf,
}

impl FolderPickItem {
    pub fn new(label: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            full_path: full_path.into(),
        }
    }
}

/// A single file relocation, built per invocation and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: PathBuf,
    pub target_dir: PathBuf,
}

impl MoveRequest {
    pub fn new(source: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Base name of the source file, or `None` for paths like `/` or `..`.
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.source.file_name()
    }

    /// Where the file ends up: the target directory joined with the source
    /// base name.
    pub fn target_path(&self) -> Option<PathBuf> {
        self.file_name().map(|name| self.target_dir.join(name))
    }

    /// True when the computed destination is the source itself.
    pub fn is_noop(&self) -> bool {
        self.target_path()
            .map(|target| target.as_path() == Path::new(&self.source))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_joins_base_name() {
        let req = MoveRequest::new("/proj/foo.txt", "/proj/sub");
        assert_eq!(req.target_path(), Some(PathBuf::from("/proj/sub/foo.txt")));
        assert!(!req.is_noop());
    }

    #[test]
    fn test_same_directory_is_noop() {
        let req = MoveRequest::new("/proj/foo.txt", "/proj");
        assert!(req.is_noop());
    }

    #[test]
    fn test_root_source_has_no_target() {
        let req = MoveRequest::new("/", "/proj");
        assert_eq!(req.target_path(), None);
        assert!(!req.is_noop());
    }
}
