//! Log file setup.
//!
//! The picker owns the terminal, so logs go to
//! `<cache dir>/relocate/relocate.log` and only fall back to stderr when no
//! cache directory is available. The filter comes from `RELOCATE_LOG`
//! (default `warn`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG;

const DEFAULT_FILTER: &str = "warn";

/// Path of the log file, if a cache directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("relocate").join("relocate.log"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when logging to stderr. Calling it twice is harmless.
pub fn init_logging() -> Option<PathBuf> {
    let file = log_file_path().and_then(|path| {
        let parent = path.parent()?;
        std::fs::create_dir_all(parent).ok()?;
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    });

    match file {
        Some((path, file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Some(path)
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_shape() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("relocate/relocate.log"));
        }
    }
}
