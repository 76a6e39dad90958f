//! Terminal management with RAII cleanup.
//!
//! The picker draws on stderr so that stdout stays free for the moved
//! file's new path (`--reopen print`) and can be piped. `TerminalManager`
//! restores the terminal when dropped, whether the picker finished,
//! failed or the process is unwinding from a panic.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::{terminal::enable_raw_mode, tty::IsTty};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stderr};

/// Terminal type the picker draws on.
pub type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Whether both stdin and stderr are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_tty() && io::stderr().is_tty()
}

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stderr());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the picker terminal and its cleanup guard.
///
/// Install `setup_panic_hook()` before creating one; the hook covers the
/// paths where `Drop` does not run.
pub struct TerminalManager {
    terminal: PickerTerminal,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen on stderr and clear it.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes whatever partial setup happened.
        let guard = TerminalGuard::new();

        let mut stderr = io::stderr();
        enter_tui_mode(&mut stderr)?;

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    /// Mutable access to the underlying terminal.
    pub fn terminal(&mut self) -> &mut PickerTerminal {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> io::Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()
    }
}
