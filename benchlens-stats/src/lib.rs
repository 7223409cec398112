#![warn(missing_docs)]
//! Benchlens Statistical Engine
//!
//! Descriptive statistics over the valid values of a measurement group:
//! - Metric value filtering (null and non-positive values are excluded)
//! - Summary aggregates (min, max, mean, median)
//!
//! A group with no valid values produces no summary at all rather than zero
//! placeholders; absence is explicit and callers omit the metric entirely.

mod filter;
mod summary;

pub use filter::positive_values;
pub use summary::{MetricSummary, compute_summary, mean, median};
