#![warn(missing_docs)]
//! Benchlens CLI Library
//!
//! Single analytical pipeline over a results CSV: parse, group, aggregate,
//! format. Use [`run`] in your main function to get the full CLI experience.
//!
//! The run is fully synchronous and single-threaded; the record set is small
//! and loaded whole before any analysis begins. Only a missing input file is
//! a process failure — every other degraded condition (unparsable cell,
//! unavailable metric, empty valid set) is absorbed per design.

mod analysis;
mod error;
mod grouping;
mod loader;
mod record;

pub use analysis::{build_report, select_best_configs};
pub use error::AnalysisError;
pub use grouping::{family, group_by_family, group_by_size};
pub use loader::{DEFAULT_INPUT, load_records};
pub use record::Record;

use benchlens_report::format_report;
use clap::Parser;
use std::path::PathBuf;

/// Benchlens CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchlens")]
#[command(author, version, about = "Benchlens - benchmark results analyzer")]
pub struct Cli {
    /// Path to the results CSV produced by the benchmark harness
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the Benchlens CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Benchlens CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("benchlens=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("benchlens=info")
            .with_writer(std::io::stderr)
            .init();
    }

    let records = load_records(&cli.input)?;
    let report = build_report(&records);
    print!("{}", format_report(&report));

    Ok(())
}
