//! Editor host for a plain terminal session.
//!
//! There is no editor process to talk to: the "unsaved buffer" is a file
//! handed over with `--unsaved`, closing is a no-op, and reopening follows
//! [`ReopenMode`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::ReopenMode;
use crate::error::classify_io_error;
use crate::traits::{EditorHost, HostError};

/// Editor host backed by the filesystem and the user's environment.
#[derive(Debug, Clone, Default)]
pub struct SystemEditorHost {
    /// File holding the editor's unsaved contents for the active file
    unsaved: Option<PathBuf>,
    reopen: ReopenMode,
}

impl SystemEditorHost {
    pub fn new(reopen: ReopenMode) -> Self {
        Self {
            unsaved: None,
            reopen,
        }
    }

    /// Use `buffer` as the unsaved contents written by [`EditorHost::save`].
    pub fn with_unsaved(mut self, buffer: impl Into<PathBuf>) -> Self {
        self.unsaved = Some(buffer.into());
        self
    }

    async fn launch_editor(&self, path: &Path) -> Result<(), HostError> {
        let command_line = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .map_err(|_| HostError::Unavailable("neither $VISUAL nor $EDITOR is set".to_string()))?;

        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| HostError::Unavailable("editor command is empty".to_string()))?;

        debug!(editor = program, path = %path.display(), "Launching editor");
        let status = tokio::process::Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await
            .map_err(|e| HostError::Io(classify_io_error(e, Some(PathBuf::from(program)), "launch editor")))?;

        if status.success() {
            Ok(())
        } else {
            Err(HostError::Other(format!("{} exited with {}", program, status)))
        }
    }
}

#[async_trait]
impl EditorHost for SystemEditorHost {
    async fn save(&self, path: &Path) -> Result<(), HostError> {
        let Some(buffer) = &self.unsaved else {
            return Ok(());
        };

        let contents = tokio::fs::read(buffer)
            .await
            .map_err(|e| classify_io_error(e, Some(buffer.clone()), "read unsaved buffer"))?;
        tokio::fs::write(path, &contents)
            .await
            .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "save"))?;

        info!(path = %path.display(), bytes = contents.len(), "Saved unsaved buffer");
        Ok(())
    }

    async fn focus(&self, path: &Path) -> Result<(), HostError> {
        debug!(path = %path.display(), "Focus requested; nothing to focus");
        Ok(())
    }

    async fn close_active(&self) -> Result<(), HostError> {
        debug!("Close requested; no editor pane to close");
        Ok(())
    }

    async fn open(&self, path: &Path) -> Result<(), HostError> {
        match self.reopen {
            ReopenMode::Print => {
                println!("{}", path.display());
                Ok(())
            }
            ReopenMode::Editor => self.launch_editor(path).await,
            ReopenMode::System => open::that_detached(path)
                .map_err(|e| HostError::Io(classify_io_error(e, Some(path.to_path_buf()), "open"))),
            ReopenMode::None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_writes_unsaved_buffer() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.md");
        let buffer = dir.path().join("buffer");
        std::fs::write(&file, "on disk").unwrap();
        std::fs::write(&buffer, "edited").unwrap();

        let host = SystemEditorHost::new(ReopenMode::None).with_unsaved(&buffer);
        host.save(&file).await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "edited");
        assert_eq!(std::fs::read_to_string(&buffer).unwrap(), "edited");
    }

    #[tokio::test]
    async fn test_save_without_buffer_leaves_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "on disk").unwrap();

        let host = SystemEditorHost::new(ReopenMode::None);
        host.save(&file).await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "on disk");
    }

    #[tokio::test]
    async fn test_save_missing_buffer_is_io_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.md");

        let host = SystemEditorHost::new(ReopenMode::None).with_unsaved(dir.path().join("nope"));
        let err = host.save(&file).await.unwrap_err();

        assert!(matches!(err, HostError::Io(_)));
    }

    #[tokio::test]
    async fn test_close_and_reopen_none_are_noops() {
        let host = SystemEditorHost::new(ReopenMode::None);
        host.focus(Path::new("/x")).await.unwrap();
        host.close_active().await.unwrap();
        host.open(Path::new("/x")).await.unwrap();
    }
}
