use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use afs::cli::{Command, USAGE, version_line};
use afs::config::{OutputFormat, ScanOptions};
use afs::scanner::{Listing, ListingTarget, ProgressObserver, QuietObserver, ScanObserver, Scanner};

fn main() -> ExitCode {
    match Command::from_args(std::env::args_os()) {
        Command::Help => {
            eprintln!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("{}", version_line());
            ExitCode::SUCCESS
        }
        Command::UsageError => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Command::Run(options) => match run(options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(options: ScanOptions) -> Result<()> {
    let json = options.format == OutputFormat::Json;

    let mut observer: Box<dyn ScanObserver> = if options.verbose {
        Box::new(Listing::with_header(ListingTarget::detect(json).writer())?)
    } else if options.show_progress() {
        Box::new(ProgressObserver::new())
    } else {
        Box::new(QuietObserver)
    };

    let scanner = Scanner::new(options);
    let report = scanner.run(&mut observer)?;
    drop(observer);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", report)?;
    }
    out.flush()?;
    Ok(())
}
