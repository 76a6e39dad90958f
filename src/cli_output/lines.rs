//! Simple line-based CLI output utilities.

use std::io::{self, Write};

use crate::models::{FolderPickItem, Notice, NoticeLevel};

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
}

/// Format a notice as a single status line.
///
/// ```text
/// ✓ Moved 'notes.md' to './docs'.
/// ```
pub fn format_notice(notice: &Notice) -> String {
    let icon = match notice.level {
        NoticeLevel::Info => icons::SUCCESS,
        NoticeLevel::Error => icons::FAILURE,
    };
    format!("{} {}", icon, notice.message)
}

/// Write every candidate as `label<TAB>path`, one per line.
pub fn write_candidates<W: Write>(writer: &mut W, items: &[FolderPickItem]) -> io::Result<()> {
    for item in items {
        writeln!(writer, "{}\t{}", item.label, item.full_path.display())?;
    }
    writer.flush()
}
