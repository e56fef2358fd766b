//! Per-file upload statistics
//!
//! A `StatsCollector` tracks one file's running counters and, when an
//! observer is registered, emits an immutable snapshot after every batch.
//! Progress reporting is strictly separable from the upload logic: with no
//! observer the counters still advance and nothing is emitted.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Observer invoked with a snapshot after every uploaded batch
pub type StatsObserver = Arc<dyn Fn(&UploadStats) + Send + Sync>;

/// Immutable snapshot of one file's upload progress
#[derive(Debug, Clone, Serialize)]
pub struct UploadStats {
    /// File being uploaded
    pub file: PathBuf,

    /// Total statements in the file (approximate for whole-document formats)
    pub total_units: usize,

    /// Statements uploaded so far
    pub uploaded_units: usize,

    /// Percent complete; 0 when the total is unknown or zero
    pub progress_percent: f64,

    /// Seconds since the file's upload started
    pub elapsed_secs: f64,

    /// Statements per second; 0 until the clock has advanced
    pub units_per_second: f64,

    /// 1-based index of the batch just uploaded
    pub batch_number: u64,

    /// Statements in the batch just uploaded
    pub batch_units: usize,

    /// HTTP status the server answered with
    pub status_code: u16,
}

/// Running counters for one file's upload
pub struct StatsCollector {
    file_path: PathBuf,
    total_units: usize,
    uploaded_units: usize,
    batch_number: u64,
    started: Instant,
    observer: Option<StatsObserver>,
}

impl StatsCollector {
    /// Create a collector for a file; the clock starts now
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            total_units: 0,
            uploaded_units: 0,
            batch_number: 0,
            started: Instant::now(),
            observer: None,
        }
    }

    /// Register the snapshot observer
    pub fn set_observer(&mut self, observer: StatsObserver) {
        self.observer = Some(observer);
    }

    /// Record the file's total statement count
    pub fn set_total_units(&mut self, total: usize) {
        self.total_units = total;
    }

    /// Statements uploaded so far
    pub fn uploaded_units(&self) -> usize {
        self.uploaded_units
    }

    /// Batches uploaded so far
    pub fn batch_number(&self) -> u64 {
        self.batch_number
    }

    /// Account one uploaded batch and notify the observer, if any
    pub fn update(&mut self, batch_units: usize, status_code: u16) {
        self.batch_number += 1;
        self.uploaded_units += batch_units;

        let Some(observer) = &self.observer else {
            return;
        };

        let elapsed_secs = self.started.elapsed().as_secs_f64();
        let units_per_second = if elapsed_secs > 0.0 {
            self.uploaded_units as f64 / elapsed_secs
        } else {
            0.0
        };
        let progress_percent = if self.total_units > 0 {
            (self.uploaded_units as f64 / self.total_units as f64) * 100.0
        } else {
            0.0
        };

        observer(&UploadStats {
            file: self.file_path.clone(),
            total_units: self.total_units,
            uploaded_units: self.uploaded_units,
            progress_percent,
            elapsed_secs,
            units_per_second,
            batch_number: self.batch_number,
            batch_units,
            status_code,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_observer() -> (StatsObserver, Arc<Mutex<Vec<UploadStats>>>) {
        let history: Arc<Mutex<Vec<UploadStats>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&history);
        let observer: StatsObserver = Arc::new(move |stats: &UploadStats| {
            sink.lock().unwrap().push(stats.clone());
        });
        (observer, history)
    }

    #[test]
    fn test_counters_advance_without_observer() {
        let mut collector = StatsCollector::new("data.nt");
        collector.set_total_units(10);

        collector.update(4, 200);
        collector.update(6, 200);

        assert_eq!(collector.uploaded_units(), 10);
        assert_eq!(collector.batch_number(), 2);
    }

    #[test]
    fn test_snapshots_are_monotone() {
        let (observer, history) = recording_observer();
        let mut collector = StatsCollector::new("data.nt");
        collector.set_total_units(30);
        collector.set_observer(observer);

        collector.update(10, 200);
        collector.update(10, 200);
        collector.update(10, 204);

        let history = history.lock().unwrap();
        assert_eq!(history.len(), 3);
        for window in history.windows(2) {
            assert!(window[1].uploaded_units >= window[0].uploaded_units);
            assert!(window[1].batch_number > window[0].batch_number);
        }
        assert_eq!(history[2].uploaded_units, 30);
        assert_eq!(history[2].batch_number, 3);
        assert_eq!(history[2].batch_units, 10);
        assert_eq!(history[2].status_code, 204);
        assert!((history[2].progress_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_total_yields_zero_percent() {
        let (observer, history) = recording_observer();
        let mut collector = StatsCollector::new("data.ttl");
        collector.set_observer(observer);

        collector.update(5, 200);

        let history = history.lock().unwrap();
        assert_eq!(history[0].progress_percent, 0.0);
        assert_eq!(history[0].uploaded_units, 5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let (observer, history) = recording_observer();
        let mut collector = StatsCollector::new("data.nt");
        collector.set_total_units(1);
        collector.set_observer(observer);
        collector.update(1, 200);

        let history = history.lock().unwrap();
        let json = serde_json::to_value(&history[0]).unwrap();
        assert_eq!(json["uploaded_units"], 1);
        assert_eq!(json["status_code"], 200);
    }
}
