use std::path::PathBuf;

/// How the final report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// List every regular file as it is found
    pub verbose: bool,
    /// Collect the size distribution
    pub histogram: bool,
    pub format: OutputFormat,
    /// Print phase timings to stderr
    pub profile: bool,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verbose: false,
            histogram: false,
            format: OutputFormat::Text,
            profile: false,
        }
    }

    pub fn with_histogram(mut self, histogram: bool) -> Self {
        self.histogram = histogram;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_profile(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    /// Whether a progress spinner may be drawn. Listing, profiling and JSON
    /// all own the terminal in their own way.
    pub fn show_progress(&self) -> bool {
        !self.verbose && !self.profile && self.format == OutputFormat::Text
    }
}
