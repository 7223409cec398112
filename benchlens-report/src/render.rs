//! Report Rendering
//!
//! Formats the aggregated analysis as structured terminal text: four ordered
//! sections, each under an 80-column centered banner. A metric with no valid
//! values is simply absent (per-benchmark blocks) or rendered as "N/A"
//! (comparison table); no section can fail the run.

use crate::metric::Metric;
use crate::report::{FamilyStats, Report};
use benchlens_stats::MetricSummary;

const WIDTH: usize = 80;

/// Format a report for human-readable terminal display.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&banner("BENCHMARK RESULTS ANALYZER"));
    output.push_str(&format!("\nTotal records: {}\n", report.total_records));

    render_families(&mut output, &report.families);
    render_scaling(&mut output, report);
    render_comparison(&mut output, report);
    render_best(&mut output, report);

    output.push_str(&banner("Analysis complete"));
    output
}

/// 80-column banner with a centered title
fn banner(title: &str) -> String {
    format!(
        "{}\n{:^width$}\n{}\n",
        "=".repeat(WIDTH),
        title,
        "=".repeat(WIDTH),
        width = WIDTH
    )
}

fn render_families(output: &mut String, families: &[FamilyStats]) {
    output.push('\n');
    output.push_str(&banner("PER-BENCHMARK ANALYSIS"));
    output.push('\n');

    for family in families {
        output.push_str(&format!("{}\n", family.family));
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');

        // Median is reported for time only
        metric_block(output, Metric::Time, &family.time, true);
        metric_block(output, Metric::Energy, &family.energy, false);
        metric_block(output, Metric::Power, &family.power, false);
        metric_block(output, Metric::Temperature, &family.temperature, false);

        output.push('\n');
    }
}

/// One labelled metric block; omitted entirely when the metric is unavailable
fn metric_block(
    output: &mut String,
    metric: Metric,
    summary: &Option<MetricSummary>,
    with_median: bool,
) {
    let Some(summary) = summary else { return };

    output.push_str(&format!("   {}:\n", metric.label()));
    output.push_str(&format!(
        "     - Min:     {}\n",
        metric.format_value(summary.min)
    ));
    output.push_str(&format!(
        "     - Max:     {}\n",
        metric.format_value(summary.max)
    ));
    output.push_str(&format!(
        "     - Mean:    {}\n",
        metric.format_value(summary.mean)
    ));
    if with_median {
        output.push_str(&format!(
            "     - Median:  {}\n",
            metric.format_value(summary.median)
        ));
    }
}

fn render_scaling(output: &mut String, report: &Report) {
    output.push('\n');
    output.push_str(&banner("SCALING BY INPUT SIZE"));
    output.push('\n');

    for bucket in &report.scaling {
        output.push_str(&format!("N = {:.1e}\n", bucket.n));
        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');

        for (family, mean_time_s) in &bucket.mean_time_s {
            output.push_str(&format!(
                "   {:<25}: {:8.3} ms\n",
                family,
                mean_time_s * 1000.0
            ));
        }

        output.push('\n');
    }
}

fn render_comparison(output: &mut String, report: &Report) {
    output.push('\n');
    output.push_str(&banner("BENCHMARK COMPARISON"));
    output.push('\n');

    output.push_str(&format!(
        "{:<25} {:<15} {:<15} {:<15}\n",
        "Benchmark", "Avg time", "Avg energy", "Avg power"
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    for row in &report.comparison {
        let time = cell(Metric::Time, row.avg_time_s);
        let energy = cell(Metric::Energy, row.avg_energy_j);
        let power = cell(Metric::Power, row.avg_power_w);

        output.push_str(&format!(
            "{:<25} {:<15} {:<15} {:<15}\n",
            row.family, time, energy, power
        ));
    }

    output.push('\n');
}

/// Table cell: the formatted value, or "N/A" when the metric is unavailable
fn cell(metric: Metric, value: Option<f64>) -> String {
    match value {
        Some(v) => metric.format_value(v),
        None => "N/A".to_string(),
    }
}

fn render_best(output: &mut String, report: &Report) {
    output.push('\n');
    output.push_str(&banner("BEST CONFIGURATIONS"));
    output.push('\n');

    let Some(best) = &report.best else {
        output.push_str("Warning: no valid measurements found\n\n");
        return;
    };

    output.push_str(&format!(
        "Best time: {}\n",
        Metric::Time.format_value(best.time.value)
    ));
    output.push_str(&format!("   Benchmark: {}\n\n", best.time.benchmark));

    if let Some(energy) = &best.energy {
        output.push_str(&format!(
            "Best energy: {}\n",
            Metric::Energy.format_value(energy.value)
        ));
        output.push_str(&format!("   Benchmark: {}\n\n", energy.benchmark));
    }

    if let Some(edp) = &best.edp {
        output.push_str(&format!("Best EDP: {:.2e}\n", edp.value));
        output.push_str(&format!("   Benchmark: {}\n\n", edp.benchmark));
    }
}
