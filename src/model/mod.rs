mod band;
mod observation;
mod report;
mod stats;

pub use band::SizeBand;
pub use observation::{EntryKind, Observation};
pub use report::{BandShare, Report};
pub use stats::{Histogram, Totals};
