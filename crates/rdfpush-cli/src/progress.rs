//! Progress rendering for uploads
//!
//! One `indicatif` bar per file, fed by the pipeline's stats observer.
//! Bars are created lazily on the first snapshot for a file, so the
//! renderer needs no advance knowledge of the input set.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rdfpush_upload::UploadStats;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Multi-bar terminal renderer for concurrent file uploads
pub struct ProgressRenderer {
    multi: MultiProgress,
    bars: Mutex<HashMap<PathBuf, ProgressBar>>,
    verbose: bool,
}

impl ProgressRenderer {
    pub fn new(verbose: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
            verbose,
        }
    }

    /// Feed one stats snapshot into the matching bar
    pub fn observe(&self, stats: &UploadStats) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };

        let bar = bars.entry(stats.file.clone()).or_insert_with(|| {
            let bar = self.multi.add(ProgressBar::new(stats.total_units as u64));
            bar.set_style(upload_bar_style());
            bar.set_message(file_label(&stats.file));
            bar
        });

        bar.set_position(stats.uploaded_units as u64);

        if self.verbose {
            let _ = self.multi.println(format!(
                "{}: batch {} ({} triples) -> HTTP {} ({:.1} triples/sec)",
                file_label(&stats.file),
                stats.batch_number,
                stats.batch_units,
                stats.status_code,
                stats.units_per_second,
            ));
        }
    }

    /// Close a file's bar once its upload finished, either way
    pub fn finish_file(&self, file: &Path, success: bool) {
        let Ok(bars) = self.bars.lock() else {
            return;
        };
        if let Some(bar) = bars.get(file) {
            if success {
                bar.finish();
            } else {
                bar.abandon_with_message(format!("{} (failed)", file_label(file)));
            }
        }
    }

    /// Remove all bars from the terminal
    pub fn clear(&self) {
        let _ = self.multi.clear();
    }
}

fn upload_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}, {eta})")
        .expect("Invalid progress bar template")
        .progress_chars("#>-")
}

fn file_label(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file.display().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn snapshot(file: &str, uploaded: usize, total: usize, batch_number: u64) -> UploadStats {
        UploadStats {
            file: PathBuf::from(file),
            total_units: total,
            uploaded_units: uploaded,
            progress_percent: 0.0,
            elapsed_secs: 1.0,
            units_per_second: uploaded as f64,
            batch_number,
            batch_units: uploaded,
            status_code: 200,
        }
    }

    #[test]
    fn test_bar_created_per_file() {
        let renderer = ProgressRenderer::new(false);
        renderer.observe(&snapshot("a.nt", 10, 100, 1));
        renderer.observe(&snapshot("b.nt", 5, 50, 1));
        renderer.observe(&snapshot("a.nt", 20, 100, 2));

        let bars = renderer.bars.lock().unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[&PathBuf::from("a.nt")].position(), 20);
        assert_eq!(bars[&PathBuf::from("b.nt")].position(), 5);
    }

    #[test]
    fn test_finish_marks_bar_done() {
        let renderer = ProgressRenderer::new(false);
        renderer.observe(&snapshot("a.nt", 100, 100, 1));
        renderer.finish_file(Path::new("a.nt"), true);

        let bars = renderer.bars.lock().unwrap();
        assert!(bars[&PathBuf::from("a.nt")].is_finished());
    }

    #[test]
    fn test_file_label_uses_file_name() {
        assert_eq!(file_label(Path::new("/tmp/data/things.nt")), "things.nt");
    }
}
