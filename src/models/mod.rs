//! Plain data types shared across the crate.

mod folder;
mod host;
mod outcome;

pub use folder::{FolderPickItem, MoveRequest};
pub use host::{ActiveFile, HostSnapshot};
pub use outcome::{MoveOutcome, Notice, NoticeLevel};
