//! Output Formatting
//!
//! Human-readable output formatting for runs and comparison reports.
//!
//! Generates terminal-friendly output with:
//! - Per-run status icons (✓/✗) and counters
//! - Per-metric rankings and the composite best
//! - Step listings with compared (`?`) and swapped (`*`) markers

use sortscope_compare::{RankingMetric, RunSummary};
use sortscope_core::{AlgorithmRegistry, RunState, Runner, Step};
use sortscope_report::Report;
use std::fmt::Display;

/// Format a comparison report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let comparison = &report.comparison;
    let mut output = String::new();

    output.push('\n');
    output.push_str("Sortscope Comparison\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  {} values, {} runs ({})\n\n",
        comparison.dataset_size,
        comparison.entries.len(),
        comparison.mode
    ));

    let name_width = comparison
        .entries
        .iter()
        .map(|e| e.algorithm.len())
        .max()
        .unwrap_or(12)
        .max(9);

    output.push_str(&format!(
        "  {:<width$}  {:>11}  {:>8}  {:>10}  {:>7}  {:>7}  {:>12}\n",
        "Algorithm",
        "Comparisons",
        "Swaps",
        "Accesses",
        "Memory",
        "Steps",
        "Time",
        width = name_width + 2
    ));
    output.push_str(&format!("  {}\n", "-".repeat(name_width + 70)));

    for entry in &comparison.entries {
        output.push_str(&format_entry_row(entry, name_width));
    }

    if !comparison.rankings.comparisons.is_empty() {
        output.push_str("\nRankings\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for metric in RankingMetric::ALL {
            output.push_str(&format!(
                "  {:<16} {}\n",
                metric.name(),
                comparison.rankings.get(metric).join(" < ")
            ));
        }
    }

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    match &comparison.best {
        Some(best) => output.push_str(&format!("  Best overall: {}\n", best)),
        None => output.push_str("  Best overall: none (every run failed)\n"),
    }
    if !comparison.failures.is_empty() {
        output.push_str(&format!(
            "  Failed: {}\n",
            comparison
                .failures
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    output
}

fn format_entry_row(entry: &RunSummary, name_width: usize) -> String {
    let icon = if entry.status == RunState::Completed {
        "✓"
    } else {
        "✗"
    };
    let mut row = format!(
        "  {} {:<width$}  {:>11}  {:>8}  {:>10}  {:>7}  {:>7}  {:>12}\n",
        icon,
        entry.algorithm,
        entry.comparisons,
        entry.swaps,
        entry.array_accesses,
        entry.memory_estimate,
        entry.total_steps,
        format_duration(entry.execution_time_ns),
        width = name_width
    );
    if let Some(failure) = &entry.failure {
        row.push_str(&format!("      error: {}\n", failure));
    }
    row
}

/// Format a single run: outcome, counters and the sorted values
pub fn format_run_summary<T: Display>(runner: &Runner<T>) -> String {
    let info = runner.algorithm_info();
    let metrics = runner.metrics();
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("{} ({})\n", info.display_name, info.name));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  time: {}  space: {}  stable: {}\n",
        info.time_complexity,
        info.space_complexity,
        if info.stable { "yes" } else { "no" }
    ));
    output.push_str(&format!("  input:  {}\n", join_values(runner.input())));

    match runner.result() {
        Ok(result) => output.push_str(&format!("  output: {}\n", join_values(result))),
        Err(e) => output.push_str(&format!("  ✗ failed: {}\n", e)),
    }

    output.push_str(&format!(
        "  comparisons: {}  swaps: {}  accesses: {}\n",
        metrics.comparisons(),
        metrics.swaps(),
        metrics.array_accesses()
    ));
    output.push_str(&format!(
        "  memory: {}  steps: {}  time: {}\n",
        metrics.memory_estimate(),
        runner.steps().len(),
        format_duration(metrics.execution_time().as_nanos() as u64)
    ));

    output
}

/// List recorded steps, at most `max_steps` of them
pub fn format_steps<T: Display>(steps: &[Step<T>], max_steps: usize) -> String {
    let mut output = String::new();
    output.push_str("\nSteps\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let width = steps.len().to_string().len();
    for step in steps.iter().take(max_steps) {
        output.push_str(&format!(
            "  {:>width$}. {}\n",
            step.number(),
            step.description(),
            width = width
        ));
        output.push_str(&format!(
            "  {:>width$}  [{}]\n",
            "",
            render_snapshot(step),
            width = width
        ));
    }

    if steps.len() > max_steps {
        output.push_str(&format!(
            "  ... {} more steps not shown\n",
            steps.len() - max_steps
        ));
    }
    output
}

/// Snapshot with markers: `*` swapped, `?` compared, `^` highlighted
fn render_snapshot<T: Display>(step: &Step<T>) -> String {
    let swapped = step.swapped();
    let compared = step.comparison();
    step.snapshot()
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let marker = if swapped.is_some_and(|(a, b)| a == i || b == i) {
                "*"
            } else if compared.is_some_and(|(a, b)| a == i || b == i) {
                "?"
            } else if step.highlighted().contains(&i) {
                "^"
            } else {
                ""
            };
            format!("{}{}", value, marker)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table of registered names with complexity and stability
pub fn format_algorithm_list(registry: &AlgorithmRegistry) -> String {
    let mut output = String::new();
    output.push_str("Available algorithms:\n");

    let width = registry.names().map(str::len).max().unwrap_or(12);
    for name in registry.names() {
        let Some(algorithm) = registry.resolve(name) else {
            continue;
        };
        let info = algorithm.info();
        let alias = if name == info.name {
            String::new()
        } else {
            format!(" (alias of {})", info.name)
        };
        output.push_str(&format!(
            "├── {:<width$}  {:<28}  space {:<26}  {}{}\n",
            name,
            info.time_complexity,
            info.space_complexity,
            if info.stable { "stable" } else { "unstable" },
            alias,
            width = width
        ));
    }

    output.push_str(&format!("{} algorithms registered.\n", registry.len()));
    output
}

/// Format nanoseconds with an adaptive unit
pub fn format_duration(nanos: u64) -> String {
    let ns = nanos as f64;
    if ns < 1_000.0 {
        format!("{} ns", nanos)
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

fn join_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::metadata::build_report_meta;
    use sortscope_compare::{ComparisonReport, ExecutionMode};
    use sortscope_core::Algorithm;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(999), "999 ns");
        assert_eq!(format_duration(1_500), "1.50 µs");
        assert_eq!(format_duration(2_250_000), "2.25 ms");
        assert_eq!(format_duration(3_000_000_000), "3.00 s");
    }

    #[test]
    fn test_human_output_lists_failures_and_best() {
        let entries = vec![
            RunSummary {
                algorithm: "merge_sort".to_string(),
                status: RunState::Completed,
                comparisons: 14,
                swaps: 20,
                array_accesses: 68,
                execution_time_ns: 4_000,
                memory_estimate: 7,
                total_steps: 50,
                failure: None,
            },
            RunSummary {
                algorithm: "quick_sort".to_string(),
                status: RunState::Failed,
                comparisons: 0,
                swaps: 0,
                array_accesses: 0,
                execution_time_ns: 10,
                memory_estimate: 1,
                total_steps: 2,
                failure: Some("cannot order arr[0]=1 against arr[2]=3".to_string()),
            },
        ];
        let comparison = ComparisonReport::from_summaries(7, ExecutionMode::Sequential, entries);
        let output = format_human_output(&Report::new(build_report_meta(), comparison));

        assert!(output.contains("✓ merge_sort"));
        assert!(output.contains("✗ quick_sort"));
        assert!(output.contains("error: cannot order"));
        assert!(output.contains("Best overall: merge_sort"));
        assert!(output.contains("Failed: quick_sort"));
    }

    #[test]
    fn test_steps_are_truncated() {
        let mut runner = Runner::new(Algorithm::SelectionSort, &[3, 2, 1]);
        runner.run().unwrap();
        let total = runner.steps().len();

        let output = format_steps(runner.steps(), 2);
        assert!(output.contains(" 1. Starting Selection Sort"));
        assert!(output.contains(&format!("... {} more steps not shown", total - 2)));
    }

    #[test]
    fn test_snapshot_markers() {
        let mut runner = Runner::new(Algorithm::SelectionSort, &[2, 1]);
        runner.run().unwrap();
        let swap = runner
            .steps()
            .iter()
            .find(|s| s.swapped().is_some())
            .unwrap();
        assert_eq!(render_snapshot(swap), "1*, 2*");
    }

    #[test]
    fn test_algorithm_list_shows_aliases() {
        let mut registry = AlgorithmRegistry::standard();
        registry.register("heap", Algorithm::PriorityQueueSort);
        let output = format_algorithm_list(&registry);
        assert!(output.contains("merge_sort"));
        assert!(output.contains("(alias of priority_queue_sort)"));
        assert!(output.contains("5 algorithms registered."));
    }
}
