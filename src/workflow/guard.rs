//! Single-slot in-flight guard with stale-response detection.
//!
//! Two mechanisms, both lock-free:
//!
//! - a CAS busy slot: at most one generation holds it at a time, so
//!   overlapping generate calls are rejected instead of merely discouraged
//!   by a UI flag;
//! - a request epoch: every accepted generate-or-upload action bumps it, and
//!   results are only published while their epoch is still current, so a
//!   slow response that lost the race cannot overwrite fresher state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Proof that a request was admitted, carrying its epoch.
#[derive(Debug)]
pub struct FlightToken {
    epoch: u64,
    holds_slot: bool,
}

#[derive(Debug, Default)]
pub struct FlightGuard {
    busy: AtomicBool,
    epoch: AtomicU64,
}

impl FlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim the single generation slot.
    ///
    /// Returns `None` when a generation is already in flight.
    pub fn try_begin(&self) -> Option<FlightToken> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        Some(FlightToken {
            epoch,
            holds_slot: true,
        })
    }

    /// Open a new epoch without claiming the busy slot.
    ///
    /// Used by the upload path, which has no busy indicator but still
    /// invalidates earlier in-flight results.
    pub fn open_epoch(&self) -> FlightToken {
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        FlightToken {
            epoch,
            holds_slot: false,
        }
    }

    /// Whether a token's result may still be published.
    pub fn is_current(&self, token: &FlightToken) -> bool {
        self.epoch.load(Ordering::Acquire) == token.epoch
    }

    /// Release the busy slot. Safe to call on every exit path.
    pub fn finish(&self, token: &FlightToken) {
        if token.holds_slot {
            self.busy.store(false, Ordering::Release);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}
