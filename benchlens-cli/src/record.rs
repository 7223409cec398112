//! Measurement Records
//!
//! One record per row of the results table, created once at load time and
//! held immutably in input order for the lifetime of the process. Numeric
//! fields are independently nullable: a field that failed coercion is `None`
//! and is excluded from every aggregate that uses it, without invalidating
//! the record for other fields.

/// One row of per-run benchmark measurements
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Run timestamp; opaque, never parsed
    pub timestamp: String,
    /// Benchmark identifier, optionally composite as `family/variant`
    pub benchmark: String,
    /// CPU power-scaling policy active during the run; recorded, not analyzed
    pub cpu_governor: String,
    /// Input size; `0` means "size not applicable"
    pub n: Option<f64>,
    /// Elapsed time in seconds
    pub time_s: Option<f64>,
    /// Consumed energy in joules
    pub energy_j: Option<f64>,
    /// Average power draw in watts
    pub power_avg_w: Option<f64>,
    /// Package temperature in degrees Celsius
    pub temperature_c: Option<f64>,
    /// Energy-delay product
    pub edp: Option<f64>,
}
