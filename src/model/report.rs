use serde::Serialize;
use std::fmt;

use super::band::SizeBand;

/// One histogram line of the final report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandShare {
    pub band: SizeBand,
    pub count: u64,
    /// Share of all files, for display only
    pub percent: f64,
}

/// Final result of a run.
///
/// `average` and `histogram` are `None` when no regular file was found, or
/// (for `histogram`) when distribution mode was off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub path: String,
    pub total_bytes: u64,
    pub total_files: u64,
    pub average: Option<u64>,
    pub histogram: Option<Vec<BandShare>>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path: {}", self.path)?;
        writeln!(
            f,
            "Total: {} bytes, {} files.",
            self.total_bytes, self.total_files
        )?;
        if let Some(average) = self.average {
            writeln!(f, "Average: {}", average)?;
        }
        if let Some(histogram) = &self.histogram {
            writeln!(f, "File size distribution:")?;
            for share in histogram {
                writeln!(
                    f,
                    "{:>10}: {:.1}% ({} files)",
                    share.band, share.percent, share.count
                )?;
            }
        }
        Ok(())
    }
}
