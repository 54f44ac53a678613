use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while walking a tree.
///
/// Only [`WalkError::Entry`] is recoverable: the entry is skipped and the
/// walk carries on. The other variants end the run without a report.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("{}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot scan {}: {reason}", .path.display())]
    Setup { path: PathBuf, reason: String },

    #[error("traversal failed: {source}")]
    Fatal {
        #[source]
        source: walkdir::Error,
    },
}

impl WalkError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WalkError::Entry { .. })
    }

    /// Path of the offending entry, if the error is tied to one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WalkError::Entry { path, .. } | WalkError::Setup { path, .. } => Some(path),
            WalkError::Fatal { source } => source.path(),
        }
    }
}
