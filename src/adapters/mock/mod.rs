//! Mock implementations for testing.
//!
//! These doubles let the move flow run against a real temporary directory
//! without a terminal or an editor.
//!
//! # Available Mocks
//!
//! - [`InMemoryEditor`] - editor host with scripted buffers and failures
//! - [`ScriptedPicker`] - picker with a preset answer
//! - [`RecordingNotifier`] - notifier that keeps every notice

pub mod editor;
pub mod notifier;
pub mod picker;

pub use editor::{EditorCall, InMemoryEditor};
pub use notifier::RecordingNotifier;
pub use picker::ScriptedPicker;
