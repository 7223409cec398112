//! Error types for the analysis pipeline.
//!
//! Only a missing input file is surfaced as a process failure. Unparsable
//! cells degrade to null fields, unavailable metrics are omitted from the
//! report, and an empty valid set downgrades the best-configuration section
//! to a warning line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The results file has not been produced yet
    #[error(
        "input file not found: {} (run the benchmark harness first: sudo ./run_benchmark_with_perf.sh)",
        path.display()
    )]
    MissingInput {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// I/O failure while reading the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
