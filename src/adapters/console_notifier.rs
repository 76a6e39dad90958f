//! Notices printed to stderr.

use std::io::{self, Write};

use crate::cli_output::format_notice;
use crate::models::Notice;
use crate::traits::Notifier;

/// Writes each notice as one status line on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_notice(notice));
    }
}
