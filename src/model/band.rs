use serde::{Serialize, Serializer};
use std::fmt;

/// Order-of-magnitude size band used by the distribution histogram.
///
/// Band `n` (for `n` in 1..=20) holds sizes with exactly `n` decimal digits,
/// i.e. `[10^(n-1), 10^n - 1]` bytes. `Empty` holds zero-byte files.
/// Twenty digits is enough for every `u64`, so the table covers the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeBand {
    Empty,
    B1,
    B10,
    B100,
    Kb1,
    Kb10,
    Kb100,
    Mb1,
    Mb10,
    Mb100,
    Gb1,
    Gb10,
    Gb100,
    Tb1,
    Tb10,
    Tb100,
    Pb1,
    Pb10,
    Pb100,
    Eb1,
    Eb10,
}

impl SizeBand {
    pub const COUNT: usize = 21;

    pub const ALL: [SizeBand; Self::COUNT] = [
        SizeBand::Empty,
        SizeBand::B1,
        SizeBand::B10,
        SizeBand::B100,
        SizeBand::Kb1,
        SizeBand::Kb10,
        SizeBand::Kb100,
        SizeBand::Mb1,
        SizeBand::Mb10,
        SizeBand::Mb100,
        SizeBand::Gb1,
        SizeBand::Gb10,
        SizeBand::Gb100,
        SizeBand::Tb1,
        SizeBand::Tb10,
        SizeBand::Tb100,
        SizeBand::Pb1,
        SizeBand::Pb10,
        SizeBand::Pb100,
        SizeBand::Eb1,
        SizeBand::Eb10,
    ];

    const LABELS: [&'static str; Self::COUNT] = [
        "empty", "1-9 B", "10-99 B", "100-999 B", "1-9 KB", "10-99 KB", "100-999 KB", "1-9 MB",
        "10-99 MB", "100-999 MB", "1-9 GB", "10-99 GB", "100-999 GB", "1-9 TB", "10-99 TB",
        "100-999 TB", "1-9 PB", "10-99 PB", "100-999 PB", "1-9 EB", "10-99 EB",
    ];

    /// Classify a byte count by its decimal digit count.
    ///
    /// Uses integer `ilog10` rather than floating-point `log10`, which can
    /// round the wrong way at exact powers of ten.
    pub fn from_size(size: u64) -> Self {
        if size == 0 {
            return SizeBand::Empty;
        }
        let digits = size.ilog10() as usize + 1;
        Self::ALL[digits.min(Self::COUNT - 1)]
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }
}

impl fmt::Display for SizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for SizeBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
