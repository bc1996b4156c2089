//! Localization metrics.
//!
//! Counts synchronization passes, slot writes and skips, and the outcome of
//! the advisory language notifications.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global localization metrics singleton.
pub struct SyncMetrics {
    passes: AtomicUsize,
    slots_written: AtomicUsize,
    slots_skipped: AtomicUsize,
    notifications_sent: AtomicUsize,
    notification_failures: AtomicUsize,
}

static METRICS: OnceLock<SyncMetrics> = OnceLock::new();

impl SyncMetrics {
    pub fn global() -> &'static SyncMetrics {
        METRICS.get_or_init(|| SyncMetrics {
            passes: AtomicUsize::new(0),
            slots_written: AtomicUsize::new(0),
            slots_skipped: AtomicUsize::new(0),
            notifications_sent: AtomicUsize::new(0),
            notification_failures: AtomicUsize::new(0),
        })
    }

    /// Record one finished synchronization pass.
    pub fn record_pass(&self, written: usize, skipped: usize) {
        self.passes.fetch_add(1, Ordering::Relaxed);
        self.slots_written.fetch_add(written, Ordering::Relaxed);
        self.slots_skipped.fetch_add(skipped, Ordering::Relaxed);
    }

    pub fn record_notification_sent(&self) {
        self.notifications_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification_failure(&self) {
        self.notification_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::Relaxed)
    }

    pub fn slots_written(&self) -> usize {
        self.slots_written.load(Ordering::Relaxed)
    }

    pub fn slots_skipped(&self) -> usize {
        self.slots_skipped.load(Ordering::Relaxed)
    }

    pub fn notifications_sent(&self) -> usize {
        self.notifications_sent.load(Ordering::Relaxed)
    }

    pub fn notification_failures(&self) -> usize {
        self.notification_failures.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let written = self.slots_written();
        let skipped = self.slots_skipped();
        let total = written + skipped;
        let coverage = if total > 0 {
            (written as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            passes: self.passes(),
            slots_written: written,
            slots_skipped: skipped,
            slot_coverage: coverage,
            notifications_sent: self.notifications_sent(),
            notification_failures: self.notification_failures(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.passes.store(0, Ordering::Relaxed);
        self.slots_written.store(0, Ordering::Relaxed);
        self.slots_skipped.store(0, Ordering::Relaxed);
        self.notifications_sent.store(0, Ordering::Relaxed);
        self.notification_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the localization counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub passes: usize,
    pub slots_written: usize,
    pub slots_skipped: usize,

    /// Written slots as a percentage (0-100) of all slots attempted
    pub slot_coverage: f64,

    pub notifications_sent: usize,
    pub notification_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn reset_metrics() {
        SyncMetrics::global().reset();
    }

    #[test]
    #[serial]
    fn test_record_pass_accumulates() {
        reset_metrics();
        let metrics = SyncMetrics::global();

        metrics.record_pass(10, 2);
        metrics.record_pass(5, 0);

        assert_eq!(metrics.passes(), 2);
        assert_eq!(metrics.slots_written(), 15);
        assert_eq!(metrics.slots_skipped(), 2);
    }

    #[test]
    #[serial]
    fn test_report_coverage() {
        reset_metrics();
        let metrics = SyncMetrics::global();
        metrics.record_pass(3, 1);

        let report = metrics.report();
        assert_eq!(report.passes, 1);
        assert!((report.slot_coverage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_report_with_no_passes() {
        reset_metrics();
        let report = SyncMetrics::global().report();
        assert_eq!(report.slot_coverage, 0.0);
        assert_eq!(report.notifications_sent, 0);
    }

    #[test]
    #[serial]
    fn test_notification_counters() {
        reset_metrics();
        let metrics = SyncMetrics::global();
        metrics.record_notification_sent();
        metrics.record_notification_sent();
        metrics.record_notification_failure();

        assert_eq!(metrics.notifications_sent(), 2);
        assert_eq!(metrics.notification_failures(), 1);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        reset_metrics();
        let json = serde_json::to_value(SyncMetrics::global().report()).unwrap();
        assert_eq!(json["passes"], 0);
        assert!(json.get("slot_coverage").is_some());
    }
}
