//! User-facing notification trait.

use crate::models::Notice;

/// Shows one-line notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}
