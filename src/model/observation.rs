use std::path::PathBuf;

/// What a filesystem entry turned out to be when it was stat'd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    /// Directories, symlinks, devices, sockets, fifos
    Other,
}

/// A single entry seen during traversal. Consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub size: u64,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Observation {
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            size,
            path: path.into(),
            kind: EntryKind::RegularFile,
        }
    }

    pub fn other(path: impl Into<PathBuf>) -> Self {
        Self {
            size: 0,
            path: path.into(),
            kind: EntryKind::Other,
        }
    }

    #[inline]
    pub fn is_regular_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }
}
