//! Logger metrics for observability
//!
//! Counters for monitoring logger health: lines written, failed writes and
//! entries dropped by the level threshold.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_text_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_line_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines appended successfully, primary, cause and divider lines alike
    lines_written: AtomicU64,

    /// Write attempts that returned an error
    write_failures: AtomicU64,

    /// Entries that passed the threshold
    entries_logged: AtomicU64,

    /// Entries rejected by the threshold
    entries_filtered: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            entries_logged: AtomicU64::new(0),
            entries_filtered: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_logged(&self) -> u64 {
        self.entries_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_filtered(&self) -> u64 {
        self.entries_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_line_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_entry_logged(&self) -> u64 {
        self.entries_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_entry_filtered(&self) -> u64 {
        self.entries_filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage of attempted writes (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures();
        let attempted = failed + self.lines_written();
        if attempted == 0 {
            0.0
        } else {
            (failed as f64 / attempted as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.entries_logged.store(0, Ordering::Relaxed);
        self.entries_filtered.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.entries_logged(), 0);
        assert_eq!(metrics.entries_filtered(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_line_written();
        }
        for _ in 0..10 {
            metrics.record_write_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_entry_logged();
        metrics.record_entry_filtered();
        metrics.reset();
        assert_eq!(metrics.entries_logged(), 0);
        assert_eq!(metrics.entries_filtered(), 0);
    }
}
