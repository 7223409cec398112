//! Report Data Structures

use benchlens_stats::MetricSummary;

/// Complete analysis report, ready for rendering
#[derive(Debug, Clone)]
pub struct Report {
    /// Number of records loaded from the input file
    pub total_records: usize,
    /// Per-family descriptive statistics, lexicographically ordered
    pub families: Vec<FamilyStats>,
    /// Size-scaling view, ascending by input size
    pub scaling: Vec<SizeBucket>,
    /// Cross-benchmark comparison rows, lexicographically ordered
    pub comparison: Vec<ComparisonRow>,
    /// Global optima; `None` when no record has a usable positive time
    pub best: Option<BestConfigs>,
}

/// Descriptive statistics for one benchmark family.
///
/// A metric with no valid values in the family is `None` and its subsection
/// is omitted from the report. A family can appear with every metric absent.
#[derive(Debug, Clone)]
pub struct FamilyStats {
    /// Family name (benchmark identifier truncated at its first `/`)
    pub family: String,
    /// Elapsed-time summary, seconds
    pub time: Option<MetricSummary>,
    /// Energy summary, joules
    pub energy: Option<MetricSummary>,
    /// Average-power summary, watts
    pub power: Option<MetricSummary>,
    /// Temperature summary, degrees Celsius
    pub temperature: Option<MetricSummary>,
}

/// Mean elapsed time per family at one input size
#[derive(Debug, Clone)]
pub struct SizeBucket {
    /// Input size value (`N`)
    pub n: f64,
    /// (family, mean time in seconds), lexicographically ordered; families
    /// with no valid time at this size are absent
    pub mean_time_s: Vec<(String, f64)>,
}

/// One row of the cross-benchmark comparison table.
///
/// Unavailable metrics render as "N/A" rather than being dropped from the
/// row, preserving column alignment.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    /// Family name
    pub family: String,
    /// Mean elapsed time, seconds
    pub avg_time_s: Option<f64>,
    /// Mean energy, joules
    pub avg_energy_j: Option<f64>,
    /// Mean power, watts
    pub avg_power_w: Option<f64>,
}

/// A single per-metric optimum
#[derive(Debug, Clone)]
pub struct BestConfig {
    /// The winning value, in the metric's stored unit
    pub value: f64,
    /// Full benchmark identifier of the originating record
    pub benchmark: String,
}

/// Global optima across all records with a positive time value
#[derive(Debug, Clone)]
pub struct BestConfigs {
    /// Minimum elapsed time (always present when any record is valid)
    pub time: BestConfig,
    /// Minimum energy among records with positive energy
    pub energy: Option<BestConfig>,
    /// Minimum energy-delay product among records with positive edp
    pub edp: Option<BestConfig>,
}
