//! Error types for relocate.
//!
//! - [`MoveError`]: anything that aborts a move once it has started
//! - [`SystemError`]: classified filesystem failures, carried inside
//!   `MoveError::Save` and `MoveError::Rename`
//!
//! Errors are reported once, at the top of the move flow, as a notice of the
//! form `Error moving file: <cause>`. Each variant also carries a stable
//! error code for the log.

mod move_error;
mod system;

pub use move_error::{MoveError, MoveResult};
pub use system::{classify_io_error, classify_rename_error, SystemError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::PathBuf;

    #[test]
    fn test_rename_error_displays_classified_cause() {
        let err = MoveError::Rename {
            from: PathBuf::from("/p/a.txt"),
            to: PathBuf::from("/p/sub/a.txt"),
            source: classify_io_error(
                Error::new(ErrorKind::PermissionDenied, "denied"),
                Some(PathBuf::from("/p/a.txt")),
                "rename",
            ),
        };
        assert_eq!(err.error_code(), "E_MOVE_RENAME");
        assert!(err.to_string().contains("permission denied"));
        assert!(err.user_message().contains("cannot rename"));
    }

    #[test]
    fn test_no_active_file_message() {
        assert_eq!(MoveError::NoActiveFile.to_string(), "No active file to move.");
        assert_eq!(MoveError::NoActiveFile.user_message(), "No active file to move.");
    }

    #[test]
    fn test_picker_error_converts() {
        let err: MoveError = crate::traits::PickerError::NotInteractive.into();
        assert_eq!(err.error_code(), "E_MOVE_PICKER");
        assert_eq!(err.to_string(), "Not running in an interactive terminal");
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes = [
            MoveError::NoActiveFile.error_code(),
            MoveError::InvalidPath { path: PathBuf::new() }.error_code(),
            MoveError::Close {
                path: PathBuf::new(),
                source: crate::traits::HostError::Other(String::new()),
            }
            .error_code(),
            MoveError::Reopen {
                path: PathBuf::new(),
                source: crate::traits::HostError::Other(String::new()),
            }
            .error_code(),
            MoveError::Picker(crate::traits::PickerError::NotInteractive).error_code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
