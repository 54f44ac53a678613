//! Physical directory traversal
//!
//! Walks a tree once without following symlinks and turns every entry into an
//! [`Observation`]. Entry types come from an `lstat` of the entry itself, so a
//! symlink to a directory shows up as a non-file and is never descended into.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::WalkError;
use crate::model::Observation;

/// Entry point for a traversal
pub struct Walker;

impl Walker {
    /// Check the root and prepare a walk over it.
    ///
    /// The root itself is resolved once (so a symlink naming a directory is
    /// accepted as a root); nothing below it is followed.
    pub fn open(root: impl AsRef<Path>) -> Result<Walk, WalkError> {
        let root = root.as_ref().to_path_buf();

        let meta = fs::metadata(&root).map_err(|err| setup_error(&root, err))?;
        if !meta.is_dir() {
            return Err(WalkError::Setup {
                path: root,
                reason: "not a directory".to_string(),
            });
        }
        fs::read_dir(&root).map_err(|err| setup_error(&root, err))?;

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Walk {
            root,
            inner,
            finished: false,
        })
    }
}

fn setup_error(root: &Path, err: io::Error) -> WalkError {
    WalkError::Setup {
        path: root.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Lazy, finite, single-use stream of observations.
///
/// Yields `Err` for entries that could not be read; those are recoverable
/// unless [`WalkError::is_fatal`] says otherwise. After a fatal error the
/// stream ends.
pub struct Walk {
    root: PathBuf,
    inner: walkdir::IntoIter,
    finished: bool,
}

impl Walk {
    /// Only regular files and errors, other entry kinds dropped
    pub fn regular_files(self) -> impl Iterator<Item = Result<Observation, WalkError>> {
        self.filter(|item| match item {
            Ok(obs) => obs.is_regular_file(),
            Err(_) => true,
        })
    }

    fn classify(&self, entry: &DirEntry) -> Result<Observation, WalkError> {
        let meta = entry
            .metadata()
            .map_err(|err| entry_error(entry.path().to_path_buf(), err))?;

        if meta.file_type().is_file() {
            Ok(Observation::file(entry.path(), meta.len()))
        } else {
            Ok(Observation::other(entry.path()))
        }
    }

    fn convert_error(&self, err: walkdir::Error) -> WalkError {
        // Failing to read the root directory itself means the walk never started
        if err.depth() == 0 {
            return WalkError::Setup {
                path: self.root.clone(),
                reason: err.to_string(),
            };
        }
        match err.path().map(Path::to_path_buf) {
            Some(path) => entry_error(path, err),
            None => WalkError::Fatal { source: err },
        }
    }
}

/// Unwrap the OS error so the message names the path only once. Errors with
/// no I/O cause (loop detection) are not tied to a readable entry and abort.
fn entry_error(path: PathBuf, err: walkdir::Error) -> WalkError {
    if err.io_error().is_none() {
        return WalkError::Fatal { source: err };
    }
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("traversal error"));
    WalkError::Entry { path, source }
}

impl Iterator for Walk {
    type Item = Result<Observation, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = match self.inner.next()? {
            Ok(entry) => self.classify(&entry),
            Err(err) => Err(self.convert_error(err)),
        };

        if matches!(&item, Err(err) if err.is_fatal()) {
            self.finished = true;
        }
        Some(item)
    }
}
