//! Grouping Engine
//!
//! Derives grouping keys and partitions the loaded record set into the
//! per-family and per-size views. No record is dropped here regardless of
//! field validity; per-metric filtering happens downstream.

use crate::record::Record;
use std::collections::BTreeMap;

/// Family name: the benchmark identifier truncated at its first `/`.
///
/// Pure and idempotent; an identifier without a separator is its own family.
pub fn family(benchmark: &str) -> &str {
    match benchmark.find('/') {
        Some(idx) => &benchmark[..idx],
        None => benchmark,
    }
}

/// Group records by family.
///
/// Keys iterate in lexicographic order for stable report ordering; members
/// keep input order within each group.
pub fn group_by_family(records: &[Record]) -> BTreeMap<&str, Vec<&Record>> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        groups
            .entry(family(&record.benchmark))
            .or_default()
            .push(record);
    }
    groups
}

/// Group records by input size, ascending.
///
/// Records with no size value are skipped, as is the `N == 0` bucket ("size
/// not applicable"). Buckets use exact value equality; size grouping is
/// orthogonal to name-based family grouping.
pub fn group_by_size(records: &[Record]) -> Vec<(f64, Vec<&Record>)> {
    let mut buckets: Vec<(f64, Vec<&Record>)> = Vec::new();
    for record in records {
        let Some(n) = record.n else { continue };
        if n == 0.0 {
            continue;
        }
        match buckets.iter_mut().find(|(key, _)| *key == n) {
            Some((_, members)) => members.push(record),
            None => buckets.push((n, vec![record])),
        }
    }
    buckets.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    buckets
}
