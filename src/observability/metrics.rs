//! Dispatch counters
//!
//! Atomic counters updated by the dispatcher. A global collector is available
//! through [`metrics()`]; tests build their own with [`MetricsCollector::new`].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics collector instance
pub static METRICS: Lazy<MetricsCollector> = Lazy::new(MetricsCollector::new);

/// Get reference to global metrics collector
pub fn metrics() -> &'static MetricsCollector {
    &METRICS
}

/// Thread-safe dispatch counters
#[derive(Debug, Default)]
pub struct MetricsCollector {
    runs: AtomicU64,
    items_received: AtomicU64,
    items_immediate: AtomicU64,
    items_deferred: AtomicU64,
    items_handled: AtomicU64,
    items_unmatched: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub runs: u64,
    pub items_received: u64,
    pub items_immediate: u64,
    pub items_deferred: u64,
    pub items_handled: u64,
    pub items_unmatched: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a classified item
    pub fn record_received(&self, deferred: bool) {
        self.items_received.fetch_add(1, Ordering::Relaxed);
        if deferred {
            self.items_deferred.fetch_add(1, Ordering::Relaxed);
        } else {
            self.items_immediate.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_handled(&self) {
        self.items_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmatched(&self) {
        self.items_unmatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            items_received: self.items_received.load(Ordering::Relaxed),
            items_immediate: self.items_immediate.load(Ordering::Relaxed),
            items_deferred: self.items_deferred.load(Ordering::Relaxed),
            items_handled: self.items_handled.load(Ordering::Relaxed),
            items_unmatched: self.items_unmatched.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector_is_zeroed() {
        let collector = MetricsCollector::new();
        let snapshot = collector.snapshot();
        assert_eq!(snapshot.runs, 0);
        assert_eq!(snapshot.items_received, 0);
        assert_eq!(snapshot.items_handled, 0);
        assert_eq!(snapshot.items_unmatched, 0);
    }

    #[test]
    fn test_record_received_splits_by_mode() {
        let collector = MetricsCollector::new();
        collector.record_received(false);
        collector.record_received(false);
        collector.record_received(true);

        let snapshot = collector.snapshot();
        assert_eq!(snapshot.items_received, 3);
        assert_eq!(snapshot.items_immediate, 2);
        assert_eq!(snapshot.items_deferred, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let collector = MetricsCollector::new();
        collector.record_run();
        collector.record_handled();
        collector.record_unmatched();

        let json = serde_json::to_value(collector.snapshot()).unwrap();
        assert_eq!(json["runs"], 1);
        assert_eq!(json["items_handled"], 1);
        assert_eq!(json["items_unmatched"], 1);
    }
}
