//! CSV Output

use crate::report::Report;
use std::fmt::Write;

const HEADER: &str = "algorithm,status,comparisons,swaps,array_accesses,execution_time_ns,memory_estimate,total_steps,best,failure";

/// Generate a CSV report with one row per run, in request order
pub fn generate_csv_report(report: &Report) -> String {
    let comparison = &report.comparison;
    let mut csv = String::with_capacity(HEADER.len() + comparison.entries.len() * 96);
    csv.push_str(HEADER);
    csv.push('\n');

    for entry in &comparison.entries {
        let best = comparison.best.as_deref() == Some(entry.algorithm.as_str());
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{}",
            escape(&entry.algorithm),
            entry.status,
            entry.comparisons,
            entry.swaps,
            entry.array_accesses,
            entry.execution_time_ns,
            entry.memory_estimate,
            entry.total_steps,
            best,
            escape(entry.failure.as_deref().unwrap_or("")),
        );
    }

    csv
}

/// Quote a field when it contains a separator, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
