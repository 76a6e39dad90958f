//! The `relocate` command.
//!
//! Builds the host snapshot from the arguments, picks the adapters and
//! runs the move. `--list` stops after enumeration.

pub mod args;

pub use args::Cli;

use std::io;

use color_eyre::Result;
use tracing::debug;

use crate::adapters::{ConsoleNotifier, FixedFolderPicker, SystemEditorHost, TuiFolderPicker};
use crate::cli_output::write_candidates;
use crate::config::MoveConfig;
use crate::models::HostSnapshot;
use crate::mover::MoveOrchestrator;
use crate::traits::FolderPicker;
use crate::workspace::{build_pick_items, enumerate_folders};

/// Exit status for moved, unchanged and cancelled runs.
pub const EXIT_OK: i32 = 0;
/// Exit status when the move failed.
pub const EXIT_FAILURE: i32 = 1;

/// Run the command and return the process exit status.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = cli.config();
    let snapshot = cli.snapshot()?;
    debug!(?config, roots = snapshot.roots.len(), "Starting");

    if cli.list {
        let folders = enumerate_folders(&snapshot.roots, &config.scan).await;
        let items = build_pick_items(&folders, &snapshot.roots);
        write_candidates(&mut io::stdout().lock(), &items)?;
        return Ok(EXIT_OK);
    }

    let mut editor = SystemEditorHost::new(config.reopen);
    if let Some(buffer) = &cli.unsaved {
        editor = editor.with_unsaved(buffer);
    }

    let code = match &cli.to {
        Some(target) => execute(editor, FixedFolderPicker::new(target), config, &snapshot).await,
        None => {
            let subject = snapshot
                .active_file
                .as_ref()
                .and_then(|file| file.path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            execute(editor, TuiFolderPicker::new(subject), config, &snapshot).await
        }
    };
    Ok(code)
}

async fn execute<P: FolderPicker>(
    editor: SystemEditorHost,
    picker: P,
    config: MoveConfig,
    snapshot: &HostSnapshot,
) -> i32 {
    let orchestrator = MoveOrchestrator::new(editor, picker, ConsoleNotifier, config);
    let outcome = orchestrator.run(snapshot).await;
    debug!(?outcome, "Finished");

    if outcome.is_error() {
        EXIT_FAILURE
    } else {
        EXIT_OK
    }
}
