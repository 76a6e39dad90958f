//! Move orchestration.
//!
//! ```text
//! HostSnapshot
//!   -> no active file?      error notice, stop
//!   -> enumerate folders    none? info notice, stop
//!   -> pick a folder        dismissed? stop silently
//!   -> compute target       already there? info notice, stop
//!   -> move_file            save, close, create folder, rename
//!   -> reopen               success notice
//! ```
//!
//! Every failure after the active-file check is reported once, as an error
//! notice plus an `error!` log entry, and ends the run with
//! [`MoveOutcome::Failed`].

mod file_move;

pub use file_move::{move_file, SAME_PATH_MESSAGE};

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::MoveConfig;
use crate::error::{MoveError, MoveResult};
use crate::models::{ActiveFile, HostSnapshot, MoveOutcome, MoveRequest, Notice};
use crate::traits::{EditorHost, FolderPicker, Notifier};
use crate::workspace::{build_pick_items, enumerate_folders, normalize_path, resolve_label};

/// Notice when there is nothing to move.
pub const NO_ACTIVE_FILE_MESSAGE: &str = "No active file to move.";
/// Notice when the workspace has no candidate folders.
pub const NO_FOLDERS_MESSAGE: &str =
    "No suitable folders found in the workspace to move the file to.";
/// Notice when the chosen folder already holds the file.
pub const ALREADY_IN_PLACE_MESSAGE: &str = "File is already in the selected destination folder.";

/// Runs the move command against injected host adapters.
pub struct MoveOrchestrator<E, P, N> {
    editor: E,
    picker: P,
    notifier: N,
    config: MoveConfig,
}

impl<E, P, N> MoveOrchestrator<E, P, N>
where
    E: EditorHost,
    P: FolderPicker,
    N: Notifier,
{
    pub fn new(editor: E, picker: P, notifier: N, config: MoveConfig) -> Self {
        Self {
            editor,
            picker,
            notifier,
            config,
        }
    }

    /// Run one move for the given host state. Never panics on I/O failure.
    pub async fn run(&self, snapshot: &HostSnapshot) -> MoveOutcome {
        let Some(file) = &snapshot.active_file else {
            error!(code = MoveError::NoActiveFile.error_code(), "No active file");
            self.notifier.notify(&Notice::error(NO_ACTIVE_FILE_MESSAGE));
            return MoveOutcome::NoActiveFile;
        };

        match self.relocate(file, &snapshot.roots).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    code = err.error_code(),
                    path = %file.path.display(),
                    error = %err,
                    "Move failed"
                );
                self.notifier.notify(&Notice::error(format!(
                    "Error moving file: {}",
                    err.user_message()
                )));
                MoveOutcome::Failed(err)
            }
        }
    }

    async fn relocate(&self, file: &ActiveFile, roots: &[PathBuf]) -> MoveResult<MoveOutcome> {
        let file = ActiveFile {
            path: normalize_path(&file.path),
            ..file.clone()
        };
        let roots: Vec<PathBuf> = roots.iter().map(|root| normalize_path(root)).collect();

        let folders = enumerate_folders(&roots, &self.config.scan).await;
        if folders.is_empty() {
            self.notifier.notify(&Notice::info(NO_FOLDERS_MESSAGE));
            return Ok(MoveOutcome::NoFolders);
        }

        let items = build_pick_items(&folders, &roots);
        let Some(target_dir) = self.picker.pick(&items).await? else {
            debug!("Folder picker dismissed");
            return Ok(MoveOutcome::Cancelled);
        };
        let target_dir = normalize_path(&target_dir);

        let request = MoveRequest::new(&file.path, &target_dir);
        let target = request.target_path().ok_or_else(|| MoveError::InvalidPath {
            path: file.path.clone(),
        })?;

        if request.is_noop() {
            self.notifier.notify(&Notice::info(ALREADY_IN_PLACE_MESSAGE));
            return Ok(MoveOutcome::AlreadyInPlace);
        }

        let label = resolve_label(&target_dir, &roots);
        if !move_file(&file, &target, &self.editor, &self.config, &self.notifier).await? {
            return Ok(MoveOutcome::AlreadyInPlace);
        }

        self.editor
            .open(&target)
            .await
            .map_err(|err| MoveError::Reopen {
                path: target.clone(),
                source: err,
            })?;

        let name = request
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(file = %name, label = %label, "Move complete");
        self.notifier
            .notify(&Notice::info(format!("Moved '{}' to '{}'.", name, label)));

        Ok(MoveOutcome::Moved {
            from: file.path,
            to: target,
            label,
        })
    }
}
