#![warn(missing_docs)]
//! Benchlens Report - data model and terminal rendering
//!
//! Holds the aggregated analysis results and renders them as human-readable
//! structured text: banner-framed sections, labelled metric blocks and a
//! fixed-width comparison table. Rendering is pure formatting; the sole output
//! channel is the terminal and there is no machine-readable mode.

mod metric;
mod render;
mod report;

pub use metric::Metric;
pub use render::format_report;
pub use report::{BestConfig, BestConfigs, ComparisonRow, FamilyStats, Report, SizeBucket};
