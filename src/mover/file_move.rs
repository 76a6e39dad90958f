//! The filesystem half of a move: flush, close, create, rename.

use std::path::Path;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::MoveConfig;
use crate::error::{classify_rename_error, MoveError, MoveResult, SystemError};
use crate::models::{ActiveFile, Notice};
use crate::traits::{EditorHost, Notifier};

/// Notice for a move onto the file's own path.
pub const SAME_PATH_MESSAGE: &str = "Source and target are the same. No move needed.";

/// Move `file` to `target`, a full file path.
///
/// A dirty buffer is saved first and a visible editor is closed (bounded by
/// [`MoveConfig::close_timeout`]) so the host does not write to the old path
/// afterwards. The destination folder is created if needed; failing to
/// create it is only logged, the rename then reports the real problem.
///
/// Returns `Ok(false)` without touching the disk when `target` is the file's
/// own path. An existing entry at `target` is never replaced; that fails
/// before the editor is touched. Nothing is rolled back if the rename fails.
pub async fn move_file<E, N>(
    file: &ActiveFile,
    target: &Path,
    host: &E,
    config: &MoveConfig,
    notifier: &N,
) -> MoveResult<bool>
where
    E: EditorHost + ?Sized,
    N: Notifier + ?Sized,
{
    let source = file.path.as_path();

    if source == target {
        notifier.notify(&Notice::info(SAME_PATH_MESSAGE));
        return Ok(false);
    }

    if tokio::fs::symlink_metadata(target).await.is_ok() {
        return Err(MoveError::Rename {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
            source: SystemError::AlreadyExists {
                path: target.to_path_buf(),
            },
        });
    }

    if file.dirty {
        host.save(source).await.map_err(|err| MoveError::Save {
            path: source.to_path_buf(),
            source: err,
        })?;
        debug!(path = %source.display(), "Saved before move");
    }

    if file.visible {
        close_editor(file, host, config).await?;
    }

    if let Some(dir) = target.parent() {
        if let Err(err) = tokio::fs::create_dir_all(dir).await {
            warn!(dir = %dir.display(), error = %err, "Could not create destination folder");
        }
    }

    tokio::fs::rename(source, target)
        .await
        .map_err(|err| MoveError::Rename {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
            source: classify_rename_error(err, source.to_path_buf(), target.to_path_buf()),
        })?;

    info!(src = %source.display(), dest = %target.display(), "Moved file");
    Ok(true)
}

async fn close_editor<E>(file: &ActiveFile, host: &E, config: &MoveConfig) -> MoveResult<()>
where
    E: EditorHost + ?Sized,
{
    let path = file.path.as_path();
    let close_error = |err| MoveError::Close {
        path: path.to_path_buf(),
        source: err,
    };

    host.focus(path).await.map_err(close_error)?;
    host.close_active().await.map_err(close_error)?;

    let limit = config.close_timeout();
    if timeout(limit, host.wait_closed(path, config.settle)).await.is_err() {
        warn!(
            path = %path.display(),
            timeout_ms = limit.as_millis() as u64,
            "Editor did not confirm close in time; moving anyway"
        );
    } else {
        debug!(path = %path.display(), "Editor closed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{EditorCall, InMemoryEditor, RecordingNotifier};
    use std::time::Duration;
    use tempfile::TempDir;

    fn fast_config() -> MoveConfig {
        MoveConfig::new().with_settle(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_same_path_is_noop() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "x").unwrap();

        let host = InMemoryEditor::new();
        let notifier = RecordingNotifier::new();
        let moved = move_file(&ActiveFile::new(&file), &file, &host, &fast_config(), &notifier)
            .await
            .unwrap();

        assert!(!moved);
        assert!(file.exists());
        assert!(host.calls().is_empty());
        assert_eq!(notifier.messages(), vec![SAME_PATH_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_creates_missing_folder() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "x").unwrap();
        let target = dir.path().join("a").join("b").join("foo.txt");

        let host = InMemoryEditor::new();
        let notifier = RecordingNotifier::new();
        let moved = move_file(&ActiveFile::new(&file), &target, &host, &fast_config(), &notifier)
            .await
            .unwrap();

        assert!(moved);
        assert!(!file.exists());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "x");
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_dirty_visible_file_is_saved_then_closed() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "old").unwrap();
        let target = dir.path().join("sub").join("foo.txt");

        let host = InMemoryEditor::new();
        host.set_buffer(&file, "unsaved");
        let active = ActiveFile::new(&file).with_dirty(true).with_visible(true);

        move_file(&active, &target, &host, &fast_config(), &RecordingNotifier::new())
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "unsaved");
        assert_eq!(
            host.calls(),
            vec![
                EditorCall::Save(file.clone()),
                EditorCall::Focus(file.clone()),
                EditorCall::CloseActive,
                EditorCall::WaitClosed(file.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn test_hanging_close_times_out_and_moves() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "x").unwrap();
        let target = dir.path().join("sub").join("foo.txt");

        let host = InMemoryEditor::new();
        host.set_close_hangs(true);
        let active = ActiveFile::new(&file).with_visible(true);

        let moved = move_file(&active, &target, &host, &fast_config(), &RecordingNotifier::new())
            .await
            .unwrap();

        assert!(moved);
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_save_failure_stops_before_rename() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "x").unwrap();
        let target = dir.path().join("sub").join("foo.txt");

        let host = InMemoryEditor::new();
        host.set_save_should_fail(true);
        let active = ActiveFile::new(&file).with_dirty(true);

        let err = move_file(&active, &target, &host, &fast_config(), &RecordingNotifier::new())
            .await
            .unwrap_err();

        assert!(matches!(err, MoveError::Save { .. }));
        assert!(file.exists());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_existing_target_is_not_replaced() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("foo.txt");
        std::fs::write(&file, "mine").unwrap();
        let target = dir.path().join("docs").join("foo.txt");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "theirs").unwrap();

        let host = InMemoryEditor::new();
        let active = ActiveFile::new(&file).with_dirty(true).with_visible(true);
        let err = move_file(&active, &target, &host, &fast_config(), &RecordingNotifier::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MoveError::Rename {
                source: SystemError::AlreadyExists { .. },
                ..
            }
        ));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "mine");
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "theirs");
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_source_is_rename_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("gone.txt");
        let target = dir.path().join("sub").join("gone.txt");

        let err = move_file(
            &ActiveFile::new(&file),
            &target,
            &InMemoryEditor::new(),
            &fast_config(),
            &RecordingNotifier::new(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "E_MOVE_RENAME");
        // Folder creation already happened and is not rolled back
        assert!(dir.path().join("sub").is_dir());
    }
}
