//! State for the interactive folder picker.

pub mod folder_picker;
pub mod fuzzy;

pub use folder_picker::{FilteredItem, FolderPickerState, MAX_VISIBLE_ROWS};
pub use fuzzy::{fuzzy_score, FuzzyMatch};
