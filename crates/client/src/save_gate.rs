//! Single-in-flight save guard.
//!
//! Saves are whole-object replaces with no cancellation, so the only
//! protection against duplicate submissions is to keep the triggering
//! control disabled while one is in flight. [`SaveGate`] is the shared
//! flag behind that: `begin` claims it or reports [`ClientError::SaveInFlight`],
//! and dropping the returned guard re-enables the control on success and
//! failure alike, so the operator can always retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ClientError, ClientResult};

/// Guards one editor surface's save button.
#[derive(Debug, Clone, Default)]
pub struct SaveGate {
    busy: Arc<AtomicBool>,
}

/// Held while a save is in flight; releases the gate on drop.
#[derive(Debug)]
pub struct SaveGuard {
    busy: Arc<AtomicBool>,
}

impl SaveGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate for a save. Fails when a save is already running.
    pub fn begin(&self) -> ClientResult<SaveGuard> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::SaveInFlight);
        }
        Ok(SaveGuard {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Whether a save is currently in flight (drives control disabling).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn second_begin_is_rejected_while_held() {
        let gate = SaveGate::new();
        let guard = gate.begin().unwrap();
        assert!(gate.is_busy());
        assert_matches!(gate.begin(), Err(ClientError::SaveInFlight));
        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn guard_releases_on_failure_paths_too() {
        let gate = SaveGate::new();
        let result: Result<(), ()> = (|| {
            let _guard = gate.begin().unwrap();
            Err(())
        })();
        assert!(result.is_err());
        // The early return dropped the guard; the control re-enables.
        assert!(!gate.is_busy());
    }

    #[test]
    fn clones_share_the_flag() {
        let gate = SaveGate::new();
        let other = gate.clone();
        let _guard = gate.begin().unwrap();
        assert!(other.is_busy());
        assert_matches!(other.begin(), Err(ClientError::SaveInFlight));
    }
}
