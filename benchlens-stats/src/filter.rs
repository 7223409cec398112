//! Metric Value Filtering
//!
//! Extracts the usable values of one metric from a group of records.
//! A null field is excluded from every aggregate that uses it without
//! invalidating the record for other fields. Zero and negative values are
//! also excluded: time, energy, power and temperature readings at or below
//! zero are physically meaningless for these measurements.

/// Collect the non-null, strictly-positive values of one metric.
///
/// The input is one `Option<f64>` per record, in input order; the output
/// preserves that order.
pub fn positive_values<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| *v > 0.0)
        .collect()
}
