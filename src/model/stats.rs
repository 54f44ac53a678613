use std::ops::RangeInclusive;

use super::band::SizeBand;

/// Running byte and file counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_bytes: u64,
    pub total_files: u64,
}

impl Totals {
    pub fn add(&mut self, size: u64) {
        self.total_bytes = self.total_bytes.saturating_add(size);
        self.total_files += 1;
    }

    /// Integer average, `None` when no files were seen
    pub fn average(&self) -> Option<u64> {
        self.total_bytes.checked_div(self.total_files)
    }
}

/// File counts per [`SizeBand`], plus the span of bands touched so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: [u64; SizeBand::COUNT],
    // Starts as the empty-range sentinel (min past the end, max before the
    // start); `min` only shrinks and `max` only grows.
    min_occupied: usize,
    max_occupied: Option<usize>,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            buckets: [0; SizeBand::COUNT],
            min_occupied: SizeBand::COUNT,
            max_occupied: None,
        }
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, size: u64) -> SizeBand {
        let band = SizeBand::from_size(size);
        let index = band.index();
        self.buckets[index] += 1;
        self.min_occupied = self.min_occupied.min(index);
        self.max_occupied = Some(self.max_occupied.map_or(index, |max| max.max(index)));
        band
    }

    pub fn count(&self, band: SizeBand) -> u64 {
        self.buckets[band.index()]
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Bands between the lowest and highest touched band, `None` before the
    /// first file. Bands inside the span may still be zero.
    pub fn occupied(&self) -> Option<RangeInclusive<SizeBand>> {
        let max = self.max_occupied?;
        let min = SizeBand::from_index(self.min_occupied)?;
        let max = SizeBand::from_index(max)?;
        Some(min..=max)
    }

    /// `(band, count)` for every band in the occupied span, low to high
    pub fn occupied_counts(&self) -> impl Iterator<Item = (SizeBand, u64)> + '_ {
        let span = self
            .occupied()
            .map(|r| r.start().index()..r.end().index() + 1)
            .unwrap_or(0..0);
        let bands: &'static [SizeBand] = &SizeBand::ALL;
        bands[span].iter().map(|&band| (band, self.count(band)))
    }
}
