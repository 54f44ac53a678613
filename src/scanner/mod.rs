//! Directory scanner
//!
//! Walks a tree once and aggregates regular-file sizes.
//!
//! # Architecture
//!
//! - **walker**: physical traversal producing observations
//! - **aggregator**: totals, size histogram, final report
//! - **observer**: per-file hooks (listing, progress, diagnostics)
//! - **Scanner**: orchestrates one run

mod aggregator;
mod observer;
mod walker;

pub use aggregator::Aggregator;
pub use observer::{
    Listing, ListingTarget, NoopObserver, ProgressObserver, QuietObserver, ScanObserver,
};
pub use walker::{Walk, Walker};

use anyhow::{Context, Result};
use std::time::Instant;

use crate::config::ScanOptions;
use crate::model::Report;

/// Runs one scan according to a [`ScanOptions`]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Walk the root, feed every regular file through `observer` and the
    /// aggregator, and return the final report.
    ///
    /// Unreadable entries are passed to `observer` and skipped. A failure to
    /// start the walk, or a fatal error during it, aborts with no report.
    pub fn run(&self, observer: &mut impl ScanObserver) -> Result<Report> {
        let total_start = Instant::now();
        let root = &self.options.root;

        let phase_start = Instant::now();
        let walk = Walker::open(root)?;
        self.profile_phase("Open root", phase_start);

        let phase_start = Instant::now();
        let mut aggregator = Aggregator::new(self.options.histogram);
        let mut skipped = 0u64;

        for item in walk {
            match item {
                Ok(obs) if obs.is_regular_file() => {
                    observer
                        .file_observed(&obs)
                        .context("Failed to write file listing")?;
                    aggregator.record(&obs);
                }
                Ok(_) => {}
                Err(err) if err.is_fatal() => {
                    observer.finish();
                    return Err(err).with_context(|| format!("Scan of {} aborted", root.display()));
                }
                Err(err) => {
                    skipped += 1;
                    observer.entry_failed(&err);
                }
            }
        }
        observer.finish();
        self.profile_phase(
            &format!(
                "Walk ({} files, {} unreadable entries)",
                aggregator.totals().total_files,
                skipped
            ),
            phase_start,
        );

        let phase_start = Instant::now();
        let report = aggregator.finalize(root);
        self.profile_phase("Finalize", phase_start);

        if self.options.profile {
            eprintln!("[PROFILE] TOTAL scanning time: {:?}", total_start.elapsed());
        }
        Ok(report)
    }

    fn profile_phase(&self, name: &str, start: Instant) {
        if self.options.profile {
            eprintln!("[PROFILE] {}: {:?}", name, start.elapsed());
        }
    }
}
