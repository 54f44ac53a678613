//! Per-entry hooks for the scan loop
//!
//! Decouples traversal and aggregation from output concerns (listing,
//! indicatif progress, diagnostics).

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufWriter, IsTerminal, LineWriter, Write};
use std::time::Duration;

use crate::error::WalkError;
use crate::model::Observation;
use crate::util::format_size;

/// Receives events as the scan proceeds
pub trait ScanObserver {
    /// Called once for every regular file, before it is aggregated
    fn file_observed(&mut self, obs: &Observation) -> io::Result<()>;

    /// Called for every entry that could not be read. The scan continues.
    fn entry_failed(&mut self, err: &WalkError) {
        eprintln!("{}", err);
    }

    /// Called once after the walk, before the report is produced
    fn finish(&mut self) {}
}

/// Verbose listing: one `"<size> <path>"` line per file
pub struct Listing<W: Write> {
    out: W,
}

impl<W: Write> Listing<W> {
    pub const HEADER: &'static str = "Size       File name";

    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the column header
    pub fn with_header(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", Self::HEADER)?;
        Ok(Self { out })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanObserver for Listing<W> {
    fn file_observed(&mut self, obs: &Observation) -> io::Result<()> {
        writeln!(self.out, "{:>10} {}", obs.size, obs.path.display())
    }

    fn finish(&mut self) {
        // Blank line between the listing and the report
        let _ = writeln!(self.out).and_then(|_| self.out.flush());
    }
}

/// Where the verbose listing is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTarget {
    /// Keeps stdout clean for JSON
    Stderr,
    /// Line-buffered, so lines interleave with diagnostics in order
    TerminalStdout,
    /// Block-buffered into a pipe or file
    PipedStdout,
}

impl ListingTarget {
    pub fn detect(json: bool) -> Self {
        Self::choose(json, io::stdout().is_terminal())
    }

    pub fn choose(json: bool, stdout_is_terminal: bool) -> Self {
        match (json, stdout_is_terminal) {
            (true, _) => ListingTarget::Stderr,
            (false, true) => ListingTarget::TerminalStdout,
            (false, false) => ListingTarget::PipedStdout,
        }
    }

    pub fn writer(self) -> Box<dyn Write> {
        match self {
            ListingTarget::Stderr => Box::new(LineWriter::new(io::stderr())),
            ListingTarget::TerminalStdout => Box::new(LineWriter::new(io::stdout())),
            ListingTarget::PipedStdout => Box::new(BufWriter::new(io::stdout())),
        }
    }
}

/// Spinner showing files and bytes seen so far.
///
/// indicatif keeps it hidden when stderr is not a terminal.
pub struct ProgressObserver {
    pb: ProgressBar,
    files: u64,
    bytes: u64,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning: {pos} files, {msg} ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Self {
            pb,
            files: 0,
            bytes: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ProgressObserver {
    fn file_observed(&mut self, obs: &Observation) -> io::Result<()> {
        self.files += 1;
        self.bytes = self.bytes.saturating_add(obs.size);
        self.pb.inc(1);
        // Formatting every file is wasteful on large trees
        if self.files % 1024 == 1 {
            self.pb.set_message(format_size(self.bytes));
        }
        Ok(())
    }

    fn entry_failed(&mut self, err: &WalkError) {
        self.pb.suspend(|| eprintln!("{}", err));
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }
}

/// Swallows everything, errors included (benchmarks and tests)
pub struct NoopObserver;

impl ScanObserver for NoopObserver {
    fn file_observed(&mut self, _obs: &Observation) -> io::Result<()> {
        Ok(())
    }

    fn entry_failed(&mut self, _err: &WalkError) {}
}

/// Diagnostics to stderr, nothing else
pub struct QuietObserver;

impl ScanObserver for QuietObserver {
    fn file_observed(&mut self, _obs: &Observation) -> io::Result<()> {
        Ok(())
    }
}

impl<T: ScanObserver + ?Sized> ScanObserver for Box<T> {
    fn file_observed(&mut self, obs: &Observation) -> io::Result<()> {
        (**self).file_observed(obs)
    }

    fn entry_failed(&mut self, err: &WalkError) {
        (**self).entry_failed(err)
    }

    fn finish(&mut self) {
        (**self).finish()
    }
}
