//! Record Loader
//!
//! Parses the results CSV produced by the external benchmark harness into
//! typed records. Columns are resolved by name from the header row, so column
//! order does not matter and extra columns are ignored. Every field except
//! `timestamp`, `benchmark` and `cpu_governor` is coerced to a float; a cell
//! that fails coercion becomes null, never an error.

use crate::error::AnalysisError;
use crate::record::Record;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Default results filename, relative to the invocation directory
pub const DEFAULT_INPUT: &str = "results_cpp.csv";

/// Load all measurement records from `path`, in input row order.
///
/// Fails with [`AnalysisError::MissingInput`] when the file does not exist;
/// the error message names the harness command that produces it.
pub fn load_records(path: &Path) -> Result<Vec<Record>, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(columns.record(&row));
    }

    tracing::debug!(count = records.len(), "loaded measurement records");
    Ok(records)
}

/// Header-resolved column indices.
///
/// A column absent from the header maps every row's field to null (numeric)
/// or empty (string); loading never fails over a missing column.
struct Columns {
    timestamp: Option<usize>,
    benchmark: Option<usize>,
    cpu_governor: Option<usize>,
    n: Option<usize>,
    time_s: Option<usize>,
    energy_j: Option<usize>,
    power_avg_w: Option<usize>,
    temperature_c: Option<usize>,
    edp: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            timestamp: find("timestamp"),
            benchmark: find("benchmark"),
            cpu_governor: find("cpu_governor"),
            n: find("N"),
            time_s: find("time_s"),
            energy_j: find("energy_J"),
            power_avg_w: find("power_avg_W"),
            temperature_c: find("temperature_C"),
            edp: find("edp"),
        }
    }

    fn record(&self, row: &StringRecord) -> Record {
        Record {
            timestamp: text(row, self.timestamp),
            benchmark: text(row, self.benchmark),
            cpu_governor: text(row, self.cpu_governor),
            n: numeric(row, self.n),
            time_s: numeric(row, self.time_s),
            energy_j: numeric(row, self.energy_j),
            power_avg_w: numeric(row, self.power_avg_w),
            temperature_c: numeric(row, self.temperature_c),
            edp: numeric(row, self.edp),
        }
    }
}

fn text(row: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).unwrap_or_default().to_string()
}

/// Coerce one cell to a float; empty, missing or non-numeric cells are null.
fn numeric(row: &StringRecord, idx: Option<usize>) -> Option<f64> {
    idx.and_then(|i| row.get(i))
        .and_then(|cell| cell.trim().parse::<f64>().ok())
}
