//! Analysis Pipeline
//!
//! Assembles the complete report from the loaded record set: per-family
//! summaries, the size-scaling view, the cross-benchmark comparison rows and
//! the best-configuration selection.

use crate::grouping::{family, group_by_family, group_by_size};
use crate::record::Record;
use benchlens_report::{
    BestConfig, BestConfigs, ComparisonRow, FamilyStats, Report, SizeBucket,
};
use benchlens_stats::{compute_summary, mean, positive_values};
use std::collections::BTreeMap;

/// Build the complete analysis report.
pub fn build_report(records: &[Record]) -> Report {
    Report {
        total_records: records.len(),
        families: family_stats(records),
        scaling: size_scaling(records),
        comparison: comparison_rows(records),
        best: select_best_configs(records),
    }
}

/// Per-family descriptive statistics, one entry per family in key order.
///
/// A family whose every metric is unavailable still gets an entry; the
/// renderer prints its header with no metric blocks.
fn family_stats(records: &[Record]) -> Vec<FamilyStats> {
    group_by_family(records)
        .into_iter()
        .map(|(name, members)| FamilyStats {
            family: name.to_string(),
            time: summarize(&members, |r| r.time_s),
            energy: summarize(&members, |r| r.energy_j),
            power: summarize(&members, |r| r.power_avg_w),
            temperature: summarize(&members, |r| r.temperature_c),
        })
        .collect()
}

fn summarize(
    members: &[&Record],
    field: impl Fn(&Record) -> Option<f64>,
) -> Option<benchlens_stats::MetricSummary> {
    compute_summary(&positive_values(members.iter().map(|r| field(r))))
}

/// Mean time per family within each input-size bucket.
fn size_scaling(records: &[Record]) -> Vec<SizeBucket> {
    group_by_size(records)
        .into_iter()
        .map(|(n, members)| {
            let mut by_family: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
            for record in &members {
                if let Some(time) = record.time_s.filter(|t| *t > 0.0) {
                    by_family
                        .entry(family(&record.benchmark))
                        .or_default()
                        .push(time);
                }
            }

            SizeBucket {
                n,
                mean_time_s: by_family
                    .into_iter()
                    .map(|(fam, times)| (fam.to_string(), mean(&times)))
                    .collect(),
            }
        })
        .collect()
}

/// Per-family mean of each comparable metric; unavailable means stay `None`
/// so the table renders them as "N/A".
fn comparison_rows(records: &[Record]) -> Vec<ComparisonRow> {
    group_by_family(records)
        .into_iter()
        .map(|(name, members)| ComparisonRow {
            family: name.to_string(),
            avg_time_s: average(&members, |r| r.time_s),
            avg_energy_j: average(&members, |r| r.energy_j),
            avg_power_w: average(&members, |r| r.power_avg_w),
        })
        .collect()
}

fn average(members: &[&Record], field: impl Fn(&Record) -> Option<f64>) -> Option<f64> {
    let values = positive_values(members.iter().map(|r| field(r)));
    if values.is_empty() {
        None
    } else {
        Some(mean(&values))
    }
}

/// Select the global per-metric optima.
///
/// Only records with a strictly-positive time participate. Returns `None`
/// when that set is empty; the renderer downgrades the section to a warning
/// line and the rest of the report is unaffected.
pub fn select_best_configs(records: &[Record]) -> Option<BestConfigs> {
    let valid: Vec<&Record> = records
        .iter()
        .filter(|r| r.time_s.is_some_and(|t| t > 0.0))
        .collect();

    if valid.is_empty() {
        tracing::warn!("no records with a positive time value; skipping best-configuration analysis");
        return None;
    }

    Some(BestConfigs {
        time: minimum(&valid, |r| r.time_s)?,
        energy: minimum(&valid, |r| r.energy_j),
        edp: minimum(&valid, |r| r.edp),
    })
}

/// First-occurrence minimum over positive values of one field.
///
/// Replacement only on a strictly smaller value, so ties keep the earlier
/// record in input order.
fn minimum(records: &[&Record], field: impl Fn(&Record) -> Option<f64>) -> Option<BestConfig> {
    let mut best: Option<(f64, &Record)> = None;
    for &record in records {
        let Some(value) = field(record) else { continue };
        if value <= 0.0 {
            continue;
        }
        match best {
            Some((current, _)) if value >= current => {}
            _ => best = Some((value, record)),
        }
    }

    best.map(|(value, record)| BestConfig {
        value,
        benchmark: record.benchmark.clone(),
    })
}
