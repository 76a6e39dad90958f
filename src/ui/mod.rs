//! Terminal rendering for the folder picker.

pub mod folder_picker;
pub mod theme;

pub use folder_picker::render_folder_picker;
