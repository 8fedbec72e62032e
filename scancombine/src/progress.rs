//! Shared progress reporting for a combine operation.
//!
//! A [`Progress`] is the one object a running operation intentionally shares
//! with the outside world. The operation is the sole writer of the completed
//! count; any number of observers may read the counts, compute a completed
//! fraction, or request cancellation from another thread. The operation polls
//! the cancellation flag once per page, so at most one page of extra work
//! happens after a request before it is observed.
//!
//! # Examples
//!
//! ```
//! use scancombine::progress::Progress;
//! use std::sync::Arc;
//!
//! let progress = Arc::new(Progress::new());
//! assert_eq!(progress.completed_unit_count(), 0);
//!
//! // Any observer may ask the operation to stop.
//! progress.request_cancellation();
//! assert!(progress.is_cancellation_requested());
//! ```

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

/// Shared page-level progress for one combine run.
///
/// `total_unit_count` is the number of pages the output will contain, set
/// once before streaming begins. `completed_unit_count` counts pages written
/// so far; it is monotonically non-decreasing and never exceeds the total.
#[derive(Debug, Default)]
pub struct Progress {
    /// Total number of pages the output will contain.
    total_unit_count: AtomicI64,
    /// Number of pages written so far.
    completed_unit_count: AtomicI64,
    /// Set when an observer asks the operation to stop.
    cancellation_requested: AtomicBool,
}

impl Progress {
    /// Create a new progress value with zero counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of pages the operation will write.
    pub fn total_unit_count(&self) -> i64 {
        self.total_unit_count.load(Ordering::Acquire)
    }

    /// Number of pages written so far.
    pub fn completed_unit_count(&self) -> i64 {
        self.completed_unit_count.load(Ordering::Acquire)
    }

    /// Fraction of the work completed, in `0.0..=1.0`.
    ///
    /// Returns `0.0` while the total is unset or zero.
    pub fn fraction_completed(&self) -> f64 {
        let total = self.total_unit_count();
        if total <= 0 {
            return 0.0;
        }
        self.completed_unit_count() as f64 / total as f64
    }

    /// Ask the operation to stop at its next per-page checkpoint.
    ///
    /// Safe to call from any thread, any number of times. Has no effect once
    /// the operation has reached a terminal state.
    pub fn request_cancellation(&self) {
        self.cancellation_requested.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancellation_requested(&self) -> bool {
        self.cancellation_requested.load(Ordering::Acquire)
    }

    /// Set the total page count. Called once, before streaming begins.
    pub(crate) fn set_total_unit_count(&self, total: i64) {
        self.total_unit_count.store(total, Ordering::Release);
    }

    /// Record one written page.
    ///
    /// Release ordering guarantees an observer that reads the new count also
    /// sees the page queued in the sink.
    pub(crate) fn advance(&self) {
        self.completed_unit_count.fetch_add(1, Ordering::Release);
    }
}
