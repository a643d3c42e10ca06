//! Timing instrumentation helpers
//!
//! Measures bootstrap steps and reports them through `tracing`.

use std::time::{Duration, Instant};
use tracing::debug;

/// Tracks the elapsed time of a named operation
///
/// # Example
///
/// ```ignore
/// use tydi_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start("load configuration");
/// let config = loader.load()?;
/// timer.finish();
/// ```
#[derive(Debug)]
pub struct TimedOperation {
    label: &'static str,
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Get elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log the elapsed time and return it
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            operation = self.label,
            elapsed_us = elapsed.as_micros() as u64,
            "Operation finished"
        );
        elapsed
    }
}
