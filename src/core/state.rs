//! Process state shared with the Ctrl+C handler.
//!
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)
//! - `CHILD_RUNNING`: Is the executable running in the foreground?
//! - `CLEANUP_PENDING`: Does a merged entry still need removing?

use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// The executable is running and shares our process group, so it receives
/// the same Ctrl+C and exits on its own.
static CHILD_RUNNING: AtomicBool = AtomicBool::new(false);

/// A merged entry may exist; exiting from the handler would skip its removal.
static CLEANUP_PENDING: AtomicBool = AtomicBool::new(false);

/// Setup the global Ctrl+C handler. Call once at program start
///
/// While the executable runs or a merged entry awaits removal, the handler
/// only records the request so the caller can still clean up. Otherwise the
/// process exits immediately.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if CHILD_RUNNING.load(Ordering::SeqCst) {
            crate::log!("watch"; "shutting down...");
        } else if CLEANUP_PENDING.load(Ordering::SeqCst) {
            crate::log!("entry"; "interrupted, cleaning up...");
        } else {
            std::process::exit(130);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Mark the executable as running (or finished).
pub fn set_child_running(running: bool) {
    CHILD_RUNNING.store(running, Ordering::SeqCst);
}

/// Mark a merged entry as possibly present (or removed).
pub fn set_cleanup_pending(pending: bool) {
    CLEANUP_PENDING.store(pending, Ordering::SeqCst);
}

/// Check if a merged entry may still need removing
pub fn is_cleanup_pending() -> bool {
    CLEANUP_PENDING.load(Ordering::SeqCst)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_default() {
        assert!(!is_shutdown());
    }
}
