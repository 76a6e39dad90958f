//! Workspace folder discovery and labelling.

mod enumerate;
mod labels;
mod paths;

pub use enumerate::{enumerate_folders, ScanOptions, DEFAULT_EXCLUDED};
pub use labels::{build_pick_items, resolve_label};
pub use paths::{normalize_path, root_name};
