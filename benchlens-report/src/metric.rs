//! Metric Presentation Contracts
//!
//! Each reported metric carries a fixed unit and precision. These are
//! presentation contracts, not configuration: time is stored in seconds and
//! reported in milliseconds at 3 decimals, energy in joules at 6 decimals,
//! power in watts at 3 decimals, temperature in degrees Celsius at 1 decimal.

/// A reported measurement metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Elapsed wall time, stored in seconds
    Time,
    /// Consumed energy in joules
    Energy,
    /// Average power draw in watts
    Power,
    /// Package temperature in degrees Celsius
    Temperature,
}

impl Metric {
    /// Block label used in the per-benchmark breakdown
    pub fn label(self) -> &'static str {
        match self {
            Metric::Time => "Time",
            Metric::Energy => "Energy",
            Metric::Power => "Average power",
            Metric::Temperature => "Temperature",
        }
    }

    /// Format a raw stored value using the metric's unit and precision
    pub fn format_value(self, value: f64) -> String {
        match self {
            Metric::Time => format!("{:.3} ms", value * 1000.0),
            Metric::Energy => format!("{:.6} J", value),
            Metric::Power => format!("{:.3} W", value),
            Metric::Temperature => format!("{:.1} °C", value),
        }
    }
}
