use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{OutputFormat, ScanOptions};

pub const USAGE: &str = "Usage: afs [-hvdV] [--json] [--profile] <dir>";

/// Version banner printed by `-V`
pub fn version_line() -> String {
    format!("Average File Size v{}", env!("CARGO_PKG_VERSION"))
}

// Help and version are handled here rather than by clap so that usage goes to
// stderr and the exit codes match the classic getopt tool. Option parsing
// stops at the first positional; anything after it is ignored.
#[derive(Parser, Debug)]
#[command(
    name = "afs",
    about = "Average file size for a directory tree",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Directory to scan, followed by ignored trailing arguments
    #[arg(num_args = 1.., trailing_var_arg = true)]
    pub paths: Vec<PathBuf>,

    /// List every file as it is found
    #[arg(short = 'v', action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Show the file size distribution
    #[arg(short = 'd', action = ArgAction::SetTrue)]
    pub distribution: bool,

    /// Print usage
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print version
    #[arg(short = 'V', action = ArgAction::SetTrue)]
    pub version: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print phase timings to stderr
    #[arg(long)]
    pub profile: bool,
}

/// What the process should do, decided from argv
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(ScanOptions),
    /// Usage on stderr, exit 0
    Help,
    /// Version on stdout, exit 0
    Version,
    /// Usage on stderr, exit 1
    UsageError,
}

impl Command {
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli.into_command(),
            Err(_) => Command::UsageError,
        }
    }
}

impl Cli {
    pub fn into_command(self) -> Command {
        if self.help {
            return Command::Help;
        }
        if self.version {
            return Command::Version;
        }
        let Some(root) = self.paths.into_iter().next() else {
            return Command::UsageError;
        };

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Command::Run(
            ScanOptions::new(root)
                .with_verbose(self.verbose)
                .with_histogram(self.distribution)
                .with_format(format)
                .with_profile(self.profile),
        )
    }
}
