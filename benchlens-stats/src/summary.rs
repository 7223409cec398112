//! Summary Statistics
//!
//! Computes the descriptive aggregates reported for each group/metric pair:
//! minimum, maximum, arithmetic mean and median. Callers filter values first
//! (see [`crate::positive_values`]); an empty input yields `None` so the
//! metric can be omitted instead of rendered as zeros.

/// Descriptive summary of one metric within one group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    /// Smallest valid value
    pub min: f64,
    /// Largest valid value
    pub max: f64,
    /// Arithmetic mean of the valid values
    pub mean: f64,
    /// Median of the valid values
    pub median: f64,
}

/// Compute the summary aggregates for a group's valid values.
///
/// Returns `None` for an empty input; the metric is unavailable for that
/// group and its subsection is omitted from the report.
pub fn compute_summary(values: &[f64]) -> Option<MetricSummary> {
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(MetricSummary {
        min,
        max,
        mean: mean(values),
        median: median(values),
    })
}

/// Arithmetic mean; 0.0 for an empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median via sorted middle element, averaging the two middles for even
/// counts; 0.0 for an empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
