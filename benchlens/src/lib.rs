#![warn(missing_docs)]
//! # Benchlens
//!
//! Post-processing report generator for benchmark measurement data.
//!
//! Benchlens reads a CSV of per-run performance measurements (timing, energy,
//! power, temperature) produced by an external benchmarking harness and prints
//! human-readable statistical summaries:
//! - **Per-benchmark breakdown**: min/max/mean/median per family and metric
//! - **Size scaling**: mean time per family across input sizes
//! - **Cross-benchmark comparison**: fixed-width table with "N/A" for
//!   unavailable metrics
//! - **Best configurations**: global optima for time, energy and EDP
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     if let Err(err) = benchlens::run() {
//!         eprintln!("Error: {err}");
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! Sparse data degrades gracefully: unparsable cells become null fields,
//! metrics with no valid values are omitted and only a missing input file
//! fails the run.

// Re-export the analysis pipeline
pub use benchlens_cli::{
    AnalysisError, Cli, DEFAULT_INPUT, Record, build_report, family, group_by_family,
    group_by_size, load_records, run, run_with_cli, select_best_configs,
};

// Re-export the report model and renderer
pub use benchlens_report::{
    BestConfig, BestConfigs, ComparisonRow, FamilyStats, Metric, Report, SizeBucket,
    format_report,
};

// Re-export the statistics primitives
pub use benchlens_stats::{MetricSummary, compute_summary, mean, median, positive_values};
