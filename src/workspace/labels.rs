//! Display labels for candidate folders.
//!
//! With a single root every label is relative to it (`./`, `./src/lib`).
//! With several roots the root's base name is prepended so identically named
//! subfolders stay distinguishable (`web/./src`, `api/./src`).

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::models::FolderPickItem;

use super::paths::{normalize_path, root_name};

/// Label for `folder` given the workspace `roots`.
///
/// Roots are tried in order and the first one containing `folder` wins.
/// Containment is by whole path components, so `/proj2` is not inside
/// `/proj`. A folder outside every root is labelled with its own path.
pub fn resolve_label(folder: &Path, roots: &[PathBuf]) -> String {
    let multi_root = roots.len() > 1;

    for root in roots {
        let Ok(relative) = folder.strip_prefix(root) else {
            continue;
        };

        let prefix = if multi_root {
            format!("{}{}./", root_name(root), MAIN_SEPARATOR)
        } else {
            "./".to_string()
        };

        if relative.as_os_str().is_empty() {
            return prefix;
        }
        return format!("{}{}", prefix, relative.display());
    }

    folder.display().to_string()
}

/// Pair every folder with its label, keeping the input order.
pub fn build_pick_items(folders: &[PathBuf], roots: &[PathBuf]) -> Vec<FolderPickItem> {
    let roots: Vec<PathBuf> = roots.iter().map(|root| normalize_path(root)).collect();
    folders
        .iter()
        .map(|folder| FolderPickItem::new(resolve_label(folder, &roots), folder.clone()))
        .collect()
}
