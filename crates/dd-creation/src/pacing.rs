//! The acknowledgment step that comes before every roll.
//!
//! Interactive front ends wait for the player here; scripted runs use
//! [`AutoConfirm`] so the roll still has a gate in front of it.

use crate::session::PendingCheck;

/// Blocks until the roll for `check` may go ahead.
pub trait RollGate {
    /// Wait for acknowledgment. An error aborts the run.
    fn await_roll(&mut self, check: &PendingCheck) -> std::io::Result<()>;
}

/// A gate that confirms immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl RollGate for AutoConfirm {
    fn await_roll(&mut self, check: &PendingCheck) -> std::io::Result<()> {
        tracing::trace!(year = check.year, "auto-confirming roll");
        Ok(())
    }
}
