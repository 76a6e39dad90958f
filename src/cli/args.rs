//! Command-line arguments.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{MoveConfig, ReopenMode, ENV_ACTIVE_FILE};
use crate::models::{ActiveFile, HostSnapshot};
use crate::workspace::normalize_path;

#[derive(Debug, Parser)]
#[command(
    name = "relocate",
    about = "Move the file you are editing into another project folder",
    version
)]
pub struct Cli {
    /// File to move (the active document)
    #[arg(value_name = "FILE", env = ENV_ACTIVE_FILE)]
    pub file: Option<PathBuf>,

    /// Workspace root; repeat for multi-root workspaces [default: current dir]
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Move into DIR without showing the picker
    #[arg(long, value_name = "DIR")]
    pub to: Option<PathBuf>,

    /// File holding the editor's unsaved contents; saved over FILE first
    #[arg(long, value_name = "PATH")]
    pub unsaved: Option<PathBuf>,

    /// FILE is shown in an editor pane that must be closed first
    #[arg(long)]
    pub visible: bool,

    /// How to reopen the file after moving it
    #[arg(long, value_enum, default_value_t = ReopenMode::Print)]
    pub reopen: ReopenMode,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Print candidate folders as label<TAB>path and exit
    #[arg(long)]
    pub list: bool,

    /// Milliseconds to wait for a closed editor to settle
    #[arg(long, value_name = "MS")]
    pub settle_ms: Option<u64>,
}

impl Cli {
    /// Environment defaults overridden by the flags that were given.
    pub fn config(&self) -> MoveConfig {
        let mut config = MoveConfig::from_env().with_reopen(self.reopen);
        if self.follow_symlinks {
            config = config.with_follow_symlinks(true);
        }
        if let Some(ms) = self.settle_ms {
            config = config.with_settle(Duration::from_millis(ms));
        }
        config
    }

    /// Configured roots, or the current directory when none were given.
    pub fn roots(&self) -> io::Result<Vec<PathBuf>> {
        if self.roots.is_empty() {
            return Ok(vec![std::env::current_dir()?]);
        }
        Ok(self.roots.iter().map(|root| normalize_path(root)).collect())
    }

    /// Host state as described by the arguments.
    pub fn snapshot(&self) -> io::Result<HostSnapshot> {
        let mut snapshot = HostSnapshot::new(self.roots()?);
        if let Some(file) = &self.file {
            snapshot = snapshot.with_active_file(
                ActiveFile::new(normalize_path(file))
                    .with_dirty(self.unsaved.is_some())
                    .with_visible(self.visible),
            );
        }
        Ok(snapshot)
    }
}
