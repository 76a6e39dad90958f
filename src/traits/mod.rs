//! Trait abstractions for the host environment.
//!
//! The move flow never talks to a terminal or an editor directly. It goes
//! through these traits so the same orchestration runs against the terminal
//! adapters in production and the in-memory mocks in tests.
//!
//! # Traits
//!
//! - [`EditorHost`] - save, focus, close and open documents
//! - [`FolderPicker`] - modal fuzzy folder selection
//! - [`Notifier`] - informational and error notices

pub mod editor;
pub mod notifier;
pub mod picker;

pub use editor::{EditorHost, HostError};
pub use notifier::Notifier;
pub use picker::{FolderPicker, PickerError};
