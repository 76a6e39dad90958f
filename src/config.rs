//! Per-invocation configuration.
//!
//! Nothing is persisted. A `MoveConfig` starts from defaults, picks up
//! environment overrides and is then adjusted by command-line flags.
//!
//! # Example
//!
//! ```ignore
//! use relocate::config::{MoveConfig, ReopenMode};
//!
//! let config = MoveConfig::from_env()
//!     .with_follow_symlinks(true)
//!     .with_reopen(ReopenMode::Editor);
//! ```

use std::time::Duration;

use tracing::warn;

use crate::workspace::ScanOptions;

/// Follow symlinked directories while enumerating ("1"/"true"/"yes"/"on")
pub const ENV_FOLLOW_SYMLINKS: &str = "RELOCATE_FOLLOW_SYMLINKS";
/// Close settle delay in milliseconds
pub const ENV_SETTLE_MS: &str = "RELOCATE_SETTLE_MS";
/// Active file when none is given on the command line
pub const ENV_ACTIVE_FILE: &str = "RELOCATE_ACTIVE_FILE";
/// `tracing` filter directive for the log file
pub const ENV_LOG: &str = "RELOCATE_LOG";

/// Default wait after closing an editor before touching the file.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// The close wait is abandoned after this many settle delays.
const CLOSE_TIMEOUT_FACTOR: u32 = 10;

/// How the moved file is brought back in front of the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReopenMode {
    /// Print the new path on stdout
    #[default]
    Print,
    /// Launch `$VISUAL` or `$EDITOR` on the new path
    Editor,
    /// Hand the new path to the system opener
    System,
    /// Do nothing
    None,
}

/// Settings for one move.
#[derive(Debug, Clone)]
pub struct MoveConfig {
    /// Folder enumeration options
    pub scan: ScanOptions,
    /// Fixed delay for hosts without a close-completion signal
    pub settle: Duration,
    /// Reopen behaviour after a successful move
    pub reopen: ReopenMode,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            settle: DEFAULT_SETTLE,
            reopen: ReopenMode::default(),
        }
    }
}

impl MoveConfig {
    /// Create a new MoveConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether symlinked directories are followed.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.scan = self.scan.with_follow_symlinks(follow);
        self
    }

    /// Set the close settle delay.
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Set the reopen behaviour.
    pub fn with_reopen(mut self, reopen: ReopenMode) -> Self {
        self.reopen = reopen;
        self
    }

    /// Upper bound on the close wait.
    pub fn close_timeout(&self) -> Duration {
        self.settle * CLOSE_TIMEOUT_FACTOR
    }

    /// Defaults with `RELOCATE_FOLLOW_SYMLINKS` and `RELOCATE_SETTLE_MS`
    /// applied. Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_FOLLOW_SYMLINKS) {
            match parse_bool(&raw) {
                Some(follow) => config = config.with_follow_symlinks(follow),
                None => warn!(var = ENV_FOLLOW_SYMLINKS, value = %raw, "Ignoring invalid boolean"),
            }
        }

        if let Ok(raw) = std::env::var(ENV_SETTLE_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config = config.with_settle(Duration::from_millis(ms)),
                Err(_) => warn!(var = ENV_SETTLE_MS, value = %raw, "Ignoring invalid milliseconds"),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_FOLLOW_SYMLINKS);
        std::env::remove_var(ENV_SETTLE_MS);
    }

    #[test]
    fn test_move_config_default() {
        let config = MoveConfig::default();
        assert!(!config.scan.follow_symlinks);
        assert_eq!(config.settle, Duration::from_millis(100));
        assert_eq!(config.reopen, ReopenMode::Print);
        assert_eq!(config.close_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_move_config_builder() {
        let config = MoveConfig::new()
            .with_follow_symlinks(true)
            .with_settle(Duration::from_millis(5))
            .with_reopen(ReopenMode::None);
        assert!(config.scan.follow_symlinks);
        assert_eq!(config.settle, Duration::from_millis(5));
        assert_eq!(config.close_timeout(), Duration::from_millis(50));
        assert_eq!(config.reopen, ReopenMode::None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_from_env_without_vars() {
        clear_env();
        let config = MoveConfig::from_env();
        assert!(!config.scan.follow_symlinks);
        assert_eq!(config.settle, DEFAULT_SETTLE);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_FOLLOW_SYMLINKS, "yes");
        std::env::set_var(ENV_SETTLE_MS, "250");

        let config = MoveConfig::from_env();
        assert!(config.scan.follow_symlinks);
        assert_eq!(config.settle, Duration::from_millis(250));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear_env();
        std::env::set_var(ENV_FOLLOW_SYMLINKS, "sometimes");
        std::env::set_var(ENV_SETTLE_MS, "soon");

        let config = MoveConfig::from_env();
        assert!(!config.scan.follow_symlinks);
        assert_eq!(config.settle, DEFAULT_SETTLE);

        clear_env();
    }
}
