//! Candidate folder discovery.
//!
//! Walks every workspace root depth-first with an explicit stack, skipping
//! well-known build and tooling directories. Unreadable directories are
//! skipped silently; the walk itself never fails.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio::fs::DirEntry;
use tracing::debug;

use super::paths::normalize_path;

/// Directory names never offered as destinations (the roots themselves are
/// exempt).
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "out",
    "dist",
    ".next",
    "__pycache__",
];

/// Knobs for [`enumerate_folders`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names skipped below a root, matched exactly
    pub excluded: HashSet<String>,
    /// Traverse symlinked directories (with cycle protection)
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            follow_symlinks: false,
        }
    }
}

impl ScanOptions {
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn is_excluded(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|name| self.excluded.contains(name))
            .unwrap_or(false)
    }
}

/// List every candidate folder under `roots`, roots included.
///
/// The result has no duplicates (overlapping or nested roots are fine) and is
/// sorted by the raw path bytes.
pub async fn enumerate_folders(roots: &[PathBuf], options: &ScanOptions) -> Vec<PathBuf> {
    let mut found: HashSet<PathBuf> = HashSet::new();

    for root in roots {
        let root = normalize_path(root);
        found.insert(root.clone());
        walk(&root, options, &mut found).await;
    }

    let mut folders: Vec<PathBuf> = found.into_iter().collect();
    folders.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!(roots = roots.len(), folders = folders.len(), "enumerated folders");
    folders
}

async fn walk(root: &Path, options: &ScanOptions, found: &mut HashSet<PathBuf>) {
    // Canonical paths already queued, only tracked when symlinks are followed
    let mut visited: HashSet<PathBuf> = HashSet::new();
    if options.follow_symlinks {
        if let Ok(real) = tokio::fs::canonicalize(root).await {
            visited.insert(real);
        }
    }

    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    debug!(path = %dir.display(), error = %err, "directory listing cut short");
                    break;
                }
            };

            if options.is_excluded(&entry.file_name()) {
                continue;
            }

            match classify(&entry, options, &mut visited).await {
                Visit::Skip => {}
                Visit::ListOnly => {
                    found.insert(entry.path());
                }
                Visit::Descend => {
                    let path = entry.path();
                    found.insert(path.clone());
                    stack.push(path);
                }
            }
        }
    }
}

enum Visit {
    /// Not a directory
    Skip,
    /// A directory whose contents were already walked through another path
    ListOnly,
    Descend,
}

async fn classify(entry: &DirEntry, options: &ScanOptions, visited: &mut HashSet<PathBuf>) -> Visit {
    let file_type = match entry.file_type().await {
        Ok(file_type) => file_type,
        Err(_) => return Visit::Skip,
    };

    if file_type.is_dir() {
        if options.follow_symlinks {
            if let Ok(real) = tokio::fs::canonicalize(entry.path()).await {
                visited.insert(real);
            }
        }
        return Visit::Descend;
    }

    if !(file_type.is_symlink() && options.follow_symlinks) {
        return Visit::Skip;
    }

    // Follow the link; dangling links and links to files are skipped.
    let path = entry.path();
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return Visit::Skip,
    }
    match tokio::fs::canonicalize(&path).await {
        Ok(real) => {
            if visited.insert(real) {
                Visit::Descend
            } else {
                debug!(path = %path.display(), "symlink points into an already walked directory");
                Visit::ListOnly
            }
        }
        Err(_) => Visit::Skip,
    }
}
