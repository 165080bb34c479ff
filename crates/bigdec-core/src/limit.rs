// crates/bigdec-core/src/limit.rs

//! Process-wide precision ceiling.
//!
//! When the limit is non-zero, the exact arithmetic operators truncate their
//! results to that many significant decimal digits. Kernels that need exact
//! intermediates take a [`PrecLimitGuard`], which saves the current limit,
//! clears it, and restores the saved value when dropped — on every exit path,
//! including unwinding.

use std::sync::atomic::{AtomicUsize, Ordering};

static PREC_LIMIT: AtomicUsize = AtomicUsize::new(0);

/// Current limit in significant decimal digits; 0 means unlimited.
#[inline]
#[must_use]
pub fn get_prec_limit() -> usize {
    PREC_LIMIT.load(Ordering::Relaxed)
}

/// Set the limit in significant decimal digits; 0 means unlimited.
#[inline]
pub fn set_prec_limit(digits: usize) {
    PREC_LIMIT.store(digits, Ordering::Relaxed);
}

/// Scoped save/clear/restore of the precision limit.
#[derive(Debug)]
pub struct PrecLimitGuard {
    saved: usize,
}

impl PrecLimitGuard {
    /// Save the current limit and clear it for the lifetime of the guard.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            saved: PREC_LIMIT.swap(0, Ordering::Relaxed),
        }
    }
}

impl Drop for PrecLimitGuard {
    fn drop(&mut self) {
        PREC_LIMIT.store(self.saved, Ordering::Relaxed);
    }
}
