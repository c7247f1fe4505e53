// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request outcomes, exposed through the admin
//! stats endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Total requests
    requests_total: AtomicU64,
    /// Names normalized successfully
    names_parsed: AtomicU64,
    /// Names that normalized to nothing
    names_rejected: AtomicU64,
    /// Entries added to the catalog
    entries_created: AtomicU64,
    /// Insertions rejected by validation
    entries_rejected: AtomicU64,
    /// Summaries resolved successfully
    summaries_served: AtomicU64,
    /// Summaries that failed (not found, unknown item, cycle)
    summaries_failed: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    pub fn record_name_parsed(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.names_parsed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_name_rejected(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.names_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_created(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.entries_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_rejected(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.entries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_served(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.summaries_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_failed(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.summaries_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            names_parsed: self.names_parsed.load(Ordering::Relaxed),
            names_rejected: self.names_rejected.load(Ordering::Relaxed),
            entries_created: self.entries_created.load(Ordering::Relaxed),
            entries_rejected: self.entries_rejected.load(Ordering::Relaxed),
            summaries_served: self.summaries_served.load(Ordering::Relaxed),
            summaries_failed: self.summaries_failed.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests processed
    pub requests_total: u64,
    pub names_parsed: u64,
    pub names_rejected: u64,
    pub entries_created: u64,
    pub entries_rejected: u64,
    pub summaries_served: u64,
    pub summaries_failed: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_basic() {
        let metrics = ServerMetrics::new();

        metrics.record_name_parsed();
        metrics.record_entry_created();
        metrics.record_entry_created();
        metrics.record_entry_rejected();
        metrics.record_summary_served();
        metrics.record_summary_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 6);
        assert_eq!(snapshot.names_parsed, 1);
        assert_eq!(snapshot.names_rejected, 0);
        assert_eq!(snapshot.entries_created, 2);
        assert_eq!(snapshot.entries_rejected, 1);
        assert_eq!(snapshot.summaries_served, 1);
        assert_eq!(snapshot.summaries_failed, 1);
    }

    #[test]
    fn test_fresh_metrics_are_zero() {
        let snapshot = ServerMetrics::new().snapshot();
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.entries_created, 0);
    }
}
