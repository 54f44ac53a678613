//! Running totals and size distribution over a stream of observations

use std::path::Path;

use crate::model::{BandShare, Histogram, Observation, Report, Totals};

/// Accumulates totals (and optionally a size histogram) one observation at a
/// time. Pure bookkeeping; nothing here can fail.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    totals: Totals,
    histogram: Option<Histogram>,
}

impl Aggregator {
    pub fn new(with_histogram: bool) -> Self {
        Self {
            totals: Totals::default(),
            histogram: with_histogram.then(Histogram::new),
        }
    }

    /// Count a regular file. Other entry kinds are ignored.
    ///
    /// Returns whether the observation was counted.
    pub fn record(&mut self, obs: &Observation) -> bool {
        if !obs.is_regular_file() {
            return false;
        }
        self.totals.add(obs.size);
        if let Some(histogram) = self.histogram.as_mut() {
            histogram.add(obs.size);
        }
        true
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    /// Build the final report. Average and distribution are left out when no
    /// file was recorded, so no division by zero can happen.
    pub fn finalize(self, path: &Path) -> Report {
        let Totals {
            total_bytes,
            total_files,
        } = self.totals;

        let histogram: Option<Vec<BandShare>> = self
            .histogram
            .filter(|_| total_files > 0)
            .map(|histogram| {
                histogram
                    .occupied_counts()
                    .map(|(band, count)| BandShare {
                        band,
                        count,
                        percent: count as f64 * 100.0 / total_files as f64,
                    })
                    .collect()
            });

        Report {
            path: path.display().to_string(),
            total_bytes,
            total_files,
            average: self.totals.average(),
            histogram,
        }
    }
}
