//! Integration tests for Benchlens
//!
//! These tests verify the end-to-end behavior of the analysis pipeline:
//! load a results CSV from disk, build the report and render it.

use benchlens::{AnalysisError, build_report, format_report, load_records};
use std::io::Write;
use std::path::Path;

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const HEADER: &str = "timestamp,benchmark,cpu_governor,N,time_s,energy_J,power_avg_W,temperature_C,edp\n";

/// The sort/hash scenario: hash has time stats only, sort has time and
/// energy, best time is hash at 1.000 ms.
#[test]
fn test_sort_hash_scenario() {
    let file = write_csv(&format!(
        "{HEADER}\
         t1,sort/1e6,performance,1000000,0.002,0.5,,,\n\
         t2,sort/1e7,performance,10000000,0.02,5,,,\n\
         t3,hash,performance,0,0.001,,,,\n"
    ));

    let records = load_records(file.path()).unwrap();
    let report = build_report(&records);
    let output = format_report(&report);

    assert!(output.contains("Total records: 3"));

    // hash: time block, no energy block before the next family header
    let hash_section = &output[output.find("hash\n").unwrap()..output.find("sort\n").unwrap()];
    assert!(hash_section.contains("   Time:"));
    assert!(!hash_section.contains("   Energy:"));

    let sort_section = &output[output.find("sort\n").unwrap()..];
    assert!(sort_section.contains("   Time:"));
    assert!(sort_section.contains("   Energy:"));

    // Two distinct size buckets for the sort rows
    assert!(output.contains("N = 1.0e6"));
    assert!(output.contains("N = 1.0e7"));

    assert!(output.contains("Best time: 1.000 ms"));
    assert!(output.contains("   Benchmark: hash"));
}

#[test]
fn test_missing_input_is_terminal() {
    let err = load_records(Path::new("does_not_exist/results_cpp.csv")).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingInput { .. }));

    let message = err.to_string();
    assert!(message.contains("does_not_exist/results_cpp.csv"));
    assert!(message.contains("run_benchmark_with_perf.sh"));
}

/// All-zero energy: subsections and columns render as absent/"N/A"
/// everywhere, the run still completes.
#[test]
fn test_all_zero_energy_degrades_to_na() {
    let file = write_csv(&format!(
        "{HEADER}\
         t1,alpha,performance,1000,0.004,0,,,\n\
         t2,beta,performance,1000,0.006,0,,,\n"
    ));

    let records = load_records(file.path()).unwrap();
    let report = build_report(&records);
    let output = format_report(&report);

    assert!(!output.contains("   Energy:"));
    assert!(output.contains("N/A"));
    assert!(output.contains("Best time:"));
    assert!(!output.contains("Best energy:"));
}

/// Sparse and malformed cells never abort the run; the record stays usable
/// for its valid fields.
#[test]
fn test_sparse_input_degrades_gracefully() {
    let file = write_csv(&format!(
        "{HEADER}\
         t1,mixed,performance,?,bogus,1.5,,,\n\
         t2,mixed,performance,2000,0.003,,,,\n"
    ));

    let records = load_records(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].time_s, None);
    assert_eq!(records[0].energy_j, Some(1.5));

    let report = build_report(&records);
    let output = format_report(&report);

    // Energy stats exist even though the energetic record has no time;
    // per-metric validity is independent.
    assert!(output.contains("   Energy:"));
    assert!(output.contains("Best time: 3.000 ms"));
}

/// No record has a positive time: the best-configuration section degrades to
/// a warning line while every other section still renders.
#[test]
fn test_no_valid_records_warns_and_continues() {
    let file = write_csv(&format!(
        "{HEADER}\
         t1,idle,performance,0,0,0,,,\n"
    ));

    let records = load_records(file.path()).unwrap();
    let report = build_report(&records);
    let output = format_report(&report);

    assert!(output.contains("Warning: no valid measurements found"));
    assert!(output.contains("PER-BENCHMARK ANALYSIS"));
    assert!(output.contains("BENCHMARK COMPARISON"));
    assert!(output.contains("idle"));
    assert!(output.contains("Analysis complete"));
}

/// EDP optimum is reported in scientific notation with the winning record's
/// full composite identifier.
#[test]
fn test_best_edp_reported() {
    let file = write_csv(&format!(
        "{HEADER}\
         t1,sort/1e6,performance,1000000,0.002,0.5,,,0.001\n\
         t2,sort/1e7,performance,10000000,0.02,5,,,0.1\n"
    ));

    let records = load_records(file.path()).unwrap();
    let report = build_report(&records);
    let output = format_report(&report);

    assert!(output.contains("Best EDP: 1.00e-3"));
    assert!(output.contains("   Benchmark: sort/1e6"));
}
