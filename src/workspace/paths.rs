use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and lexically clean.
///
/// Relative paths are resolved against the current directory. `.` components
/// are dropped and `..` pops the previous component; symlinks are not
/// resolved, so the result names the same location the user typed.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at `/`
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Display name for a workspace root: its last component, or the whole path
/// for filesystem roots like `/`.
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_normalize_drops_dots_and_trailing_slash() {
        assert_eq!(normalize_path(Path::new("/proj/./src/")), PathBuf::from("/proj/src"));
        assert_eq!(normalize_path(Path::new("/proj/src/../lib")), PathBuf::from("/proj/lib"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_relative_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize_path(Path::new("sub")), cwd.join("sub"));
    }

    #[cfg(unix)]
    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/home/me/proj")), "proj");
        assert_eq!(root_name(Path::new("/")), "/");
    }
}
