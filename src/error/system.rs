//! Filesystem error classification.
//!
//! Raw `std::io::Error`s are turned into [`SystemError`] so the move flow can
//! report something more useful than the OS string alone.

use std::fmt;
use std::path::PathBuf;

/// Filesystem failures seen while saving, creating directories or renaming.
#[derive(Debug)]
pub enum SystemError {
    /// File or directory not found.
    NotFound { path: PathBuf },

    /// Permission denied for an operation on `path`.
    PermissionDenied { path: PathBuf, operation: String },

    /// Rename across filesystems.
    CrossDevice { from: PathBuf, to: PathBuf },

    /// Destination already exists and cannot be replaced.
    AlreadyExists { path: PathBuf },

    /// Anything else the OS reported.
    Io {
        operation: String,
        path: Option<PathBuf>,
        source: std::io::Error,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NotFound { path } => format!("'{}' does not exist", path.display()),
            SystemError::PermissionDenied { path, operation } => format!(
                "Permission denied: cannot {} '{}'. Check the file permissions and try again.",
                operation,
                path.display()
            ),
            SystemError::CrossDevice { from, to } => format!(
                "Cannot move '{}' to '{}': they are on different filesystems",
                from.display(),
                to.display()
            ),
            SystemError::AlreadyExists { path } => {
                format!("'{}' already exists", path.display())
            }
            SystemError::Io {
                operation,
                path,
                source,
            } => match path {
                Some(p) => format!("Failed to {} '{}': {}", operation, p.display(), source),
                None => format!("Failed to {}: {}", operation, source),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NotFound { .. } => "E_SYS_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::CrossDevice { .. } => "E_SYS_XDEV",
            SystemError::AlreadyExists { .. } => "E_SYS_EXISTS",
            SystemError::Io { .. } => "E_SYS_IO",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NotFound { path } => {
                write!(f, "no such file or directory: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "permission denied: {} '{}'", operation, path.display())
            }
            SystemError::CrossDevice { from, to } => write!(
                f,
                "cross-device rename from '{}' to '{}'",
                from.display(),
                to.display()
            ),
            SystemError::AlreadyExists { path } => {
                write!(f, "'{}' already exists", path.display())
            }
            SystemError::Io {
                operation,
                path,
                source,
            } => match path {
                Some(p) => write!(f, "{} '{}': {}", operation, p.display(), source),
                None => write!(f, "{}: {}", operation, source),
            },
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SystemError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classify an I/O error into a SystemError.
///
/// `path` is the path the operation acted on; for renames pass the source and
/// use [`classify_rename_error`] to also get the destination.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::NotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (ErrorKind::AlreadyExists, Some(path)) => SystemError::AlreadyExists { path },
        (_, path) => SystemError::Io {
            operation: operation.to_string(),
            path,
            source: err,
        },
    }
}

/// Classify a failed `rename(from, to)`.
pub fn classify_rename_error(err: std::io::Error, from: PathBuf, to: PathBuf) -> SystemError {
    if is_cross_device_error(&err) {
        return SystemError::CrossDevice { from, to };
    }
    match err.kind() {
        // A directory sitting at the destination reports as "already exists"
        // on some platforms; blame the destination.
        std::io::ErrorKind::AlreadyExists => SystemError::AlreadyExists { path: to },
        _ => classify_io_error(err, Some(from), "rename"),
    }
}

fn is_cross_device_error(err: &std::io::Error) -> bool {
    #[cfg(unix)]
    {
        // EXDEV = 18 on Linux and macOS
        err.raw_os_error() == Some(18)
    }
    #[cfg(windows)]
    {
        // ERROR_NOT_SAME_DEVICE
        err.raw_os_error() == Some(17)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = err;
        false
    }
}
