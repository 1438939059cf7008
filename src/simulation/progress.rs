//! Progress and cancellation hooks for a running simulation.
//!
//! The pipeline has exactly one externally observable interleaving point:
//! after each generation batch it reports the completed fraction and checks
//! for cancellation. Neither hook gives the core any notion of a UI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Delivers completion fractions to a caller-supplied callback.
///
/// Generation batches complete out of order under the thread pool, so raw
/// per-batch fractions are not ordered; the reporter delivers only strictly
/// increasing values.
pub struct ProgressReporter {
    callback: Box<dyn Fn(f64) + Send + Sync>,
    last: Mutex<f64>,
}

impl ProgressReporter {
    /// Wrap a callback. The callback receives fractions in [0, 1].
    pub fn new(callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            last: Mutex::new(0.0),
        }
    }

    /// Report a completion fraction.
    ///
    /// Stale fractions (at or below the last delivered value) are dropped.
    pub fn report(&self, fraction: f64) {
        let Ok(mut last) = self.last.lock() else {
            return;
        };
        if fraction > *last {
            *last = fraction;
            (self.callback)(fraction);
        }
    }
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter").finish_non_exhaustive()
    }
}

/// Clonable cancellation flag checked at batch boundaries.
///
/// Cancelling aborts the run with [`crate::MonteVestError::Cancelled`];
/// no partial result is ever published.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
