//! Concrete implementations of the host traits.
//!
//! # Adapters
//!
//! - [`TuiFolderPicker`] - interactive ratatui picker
//! - [`FixedFolderPicker`] - destination given on the command line
//! - [`SystemEditorHost`] - filesystem-backed editor host
//! - [`ConsoleNotifier`] - notices on stderr
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryEditor`] - records calls, configurable failures
//! - [`mock::ScriptedPicker`] - returns a preset choice
//! - [`mock::RecordingNotifier`] - collects notices

pub mod console_notifier;
pub mod fixed_picker;
pub mod mock;
pub mod system_editor;
pub mod tui_picker;

pub use console_notifier::ConsoleNotifier;
pub use fixed_picker::FixedFolderPicker;
pub use mock::{InMemoryEditor, RecordingNotifier, ScriptedPicker};
pub use system_editor::SystemEditorHost;
pub use tui_picker::TuiFolderPicker;
