//! Rankings
//!
//! Per-metric orderings and the composite "best overall" pick, computed over
//! plain [`RunSummary`] values so they can be tested without running a sort.

use crate::comparator::ExecutionMode;
use serde::{Deserialize, Serialize};
use sortscope_core::{RunState, Runner};
use std::collections::BTreeSet;

/// Flattened, serializable view of one finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Variant identifier
    pub algorithm: String,
    /// Terminal state
    pub status: RunState,
    /// Element-order tests
    pub comparisons: u64,
    /// Exchanges and merge placements
    pub swaps: u64,
    /// Read/write touches of the working array
    pub array_accesses: u64,
    /// Sort body duration in nanoseconds
    pub execution_time_ns: u64,
    /// Peak auxiliary storage in slots
    pub memory_estimate: u64,
    /// Recorded steps
    pub total_steps: u64,
    /// Failure reason for failed runs
    pub failure: Option<String>,
}

impl RunSummary {
    /// Summarize a runner in whatever state it is in
    pub fn from_runner<T>(runner: &Runner<T>) -> Self {
        let metrics = runner.metrics();
        Self {
            algorithm: runner.algorithm().name().to_string(),
            status: runner.state(),
            comparisons: metrics.comparisons(),
            swaps: metrics.swaps(),
            array_accesses: metrics.array_accesses(),
            execution_time_ns: metrics.execution_time().as_nanos() as u64,
            memory_estimate: metrics.memory_estimate(),
            total_steps: runner.steps().len() as u64,
            failure: runner.failure().map(ToString::to_string),
        }
    }

    /// Whether this run can take part in rankings
    pub fn is_completed(&self) -> bool {
        self.status == RunState::Completed
    }
}

/// Metric a ranking is computed over; lower is always better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    /// Element-order tests
    Comparisons,
    /// Exchanges and placements
    Swaps,
    /// Wall-clock time of the sort body
    ExecutionTime,
    /// Peak auxiliary storage
    MemoryEstimate,
    /// Recorded steps
    TotalSteps,
}

impl RankingMetric {
    /// All metrics in report order
    pub const ALL: [RankingMetric; 5] = [
        RankingMetric::Comparisons,
        RankingMetric::Swaps,
        RankingMetric::ExecutionTime,
        RankingMetric::MemoryEstimate,
        RankingMetric::TotalSteps,
    ];

    /// Metric identifier as used in reports
    pub fn name(self) -> &'static str {
        match self {
            RankingMetric::Comparisons => "comparisons",
            RankingMetric::Swaps => "swaps",
            RankingMetric::ExecutionTime => "execution_time",
            RankingMetric::MemoryEstimate => "memory_estimate",
            RankingMetric::TotalSteps => "total_steps",
        }
    }

    /// Value of this metric for one run
    pub fn value(self, summary: &RunSummary) -> u64 {
        match self {
            RankingMetric::Comparisons => summary.comparisons,
            RankingMetric::Swaps => summary.swaps,
            RankingMetric::ExecutionTime => summary.execution_time_ns,
            RankingMetric::MemoryEstimate => summary.memory_estimate,
            RankingMetric::TotalSteps => summary.total_steps,
        }
    }
}

impl std::fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Completed variants ordered best-first, per metric
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rankings {
    /// Fewest comparisons first
    pub comparisons: Vec<String>,
    /// Fewest swaps first
    pub swaps: Vec<String>,
    /// Fastest first
    pub execution_time: Vec<String>,
    /// Least auxiliary storage first
    pub memory_estimate: Vec<String>,
    /// Fewest steps first
    pub total_steps: Vec<String>,
}

impl Rankings {
    /// Rank every metric over the completed entries
    pub fn compute(entries: &[RunSummary]) -> Self {
        Self {
            comparisons: rank_by(entries, RankingMetric::Comparisons),
            swaps: rank_by(entries, RankingMetric::Swaps),
            execution_time: rank_by(entries, RankingMetric::ExecutionTime),
            memory_estimate: rank_by(entries, RankingMetric::MemoryEstimate),
            total_steps: rank_by(entries, RankingMetric::TotalSteps),
        }
    }

    /// Ranking for one metric
    pub fn get(&self, metric: RankingMetric) -> &[String] {
        match metric {
            RankingMetric::Comparisons => &self.comparisons,
            RankingMetric::Swaps => &self.swaps,
            RankingMetric::ExecutionTime => &self.execution_time,
            RankingMetric::MemoryEstimate => &self.memory_estimate,
            RankingMetric::TotalSteps => &self.total_steps,
        }
    }
}

/// Order completed entries ascending by `metric`, ties alphabetical.
///
/// Failed entries are left out.
pub fn rank_by(entries: &[RunSummary], metric: RankingMetric) -> Vec<String> {
    let mut ranked: Vec<&RunSummary> = entries.iter().filter(|e| e.is_completed()).collect();
    ranked.sort_by(|a, b| {
        metric
            .value(a)
            .cmp(&metric.value(b))
            .then_with(|| a.algorithm.cmp(&b.algorithm))
    });
    ranked.into_iter().map(|e| e.algorithm.clone()).collect()
}

/// Composite "best overall": fastest execution time, then fewest
/// comparisons, then name. `None` when no entry completed.
pub fn select_best(entries: &[RunSummary]) -> Option<String> {
    entries
        .iter()
        .filter(|e| e.is_completed())
        .min_by(|a, b| {
            a.execution_time_ns
                .cmp(&b.execution_time_ns)
                .then_with(|| a.comparisons.cmp(&b.comparisons))
                .then_with(|| a.algorithm.cmp(&b.algorithm))
        })
        .map(|e| e.algorithm.clone())
}

/// Ranked, read-only view over one comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Number of input elements every run received
    pub dataset_size: usize,
    /// How the runs were executed
    pub mode: ExecutionMode,
    /// One entry per requested variant, in request order
    pub entries: Vec<RunSummary>,
    /// Per-metric rankings over completed runs
    pub rankings: Rankings,
    /// Composite winner
    pub best: Option<String>,
    /// Variants whose run failed
    pub failures: BTreeSet<String>,
}

impl ComparisonReport {
    /// Derive rankings, best and failures from run summaries
    pub fn from_summaries(
        dataset_size: usize,
        mode: ExecutionMode,
        entries: Vec<RunSummary>,
    ) -> Self {
        let rankings = Rankings::compute(&entries);
        let best = select_best(&entries);
        let failures = entries
            .iter()
            .filter(|e| e.status == RunState::Failed)
            .map(|e| e.algorithm.clone())
            .collect();

        Self {
            dataset_size,
            mode,
            entries,
            rankings,
            best,
            failures,
        }
    }

    /// Entry for one variant
    pub fn entry(&self, algorithm: &str) -> Option<&RunSummary> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Whether every run completed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, time_ns: u64, comparisons: u64) -> RunSummary {
        RunSummary {
            algorithm: name.to_string(),
            status: RunState::Completed,
            comparisons,
            swaps: 0,
            array_accesses: comparisons * 2,
            execution_time_ns: time_ns,
            memory_estimate: 0,
            total_steps: comparisons + 2,
            failure: None,
        }
    }

    fn failed(name: &str) -> RunSummary {
        RunSummary {
            status: RunState::Failed,
            failure: Some("cannot order".to_string()),
            ..summary(name, 0, 0)
        }
    }

    #[test]
    fn test_best_prefers_time_then_comparisons() {
        let entries = vec![
            summary("quick_sort", 500, 10),
            summary("merge_sort", 300, 20),
            summary("selection_sort", 300, 15),
        ];
        assert_eq!(select_best(&entries).as_deref(), Some("selection_sort"));
    }

    #[test]
    fn test_best_falls_back_to_name() {
        let entries = vec![summary("quick_sort", 100, 10), summary("merge_sort", 100, 10)];
        assert_eq!(select_best(&entries).as_deref(), Some("merge_sort"));
    }

    #[test]
    fn test_best_ignores_failures() {
        // A failed run with zeroed counters must not win
        let entries = vec![failed("quick_sort"), summary("merge_sort", 900, 40)];
        assert_eq!(select_best(&entries).as_deref(), Some("merge_sort"));
        assert_eq!(select_best(&[failed("quick_sort")]), None);
    }

    #[test]
    fn test_rank_ties_alphabetical() {
        let entries = vec![
            summary("selection_sort", 10, 7),
            summary("merge_sort", 10, 7),
            summary("quick_sort", 10, 3),
            failed("priority_queue_sort"),
        ];
        assert_eq!(
            rank_by(&entries, RankingMetric::Comparisons),
            vec!["quick_sort", "merge_sort", "selection_sort"]
        );
    }

    #[test]
    fn test_report_from_summaries() {
        let entries = vec![
            summary("merge_sort", 200, 14),
            failed("quick_sort"),
            summary("selection_sort", 100, 21),
        ];
        let report = ComparisonReport::from_summaries(7, ExecutionMode::Sequential, entries);

        assert_eq!(report.best.as_deref(), Some("selection_sort"));
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures.contains("quick_sort"));
        assert!(!report.is_success());
        for metric in RankingMetric::ALL {
            assert_eq!(report.rankings.get(metric).len(), 2, "{metric}");
        }
        assert_eq!(report.entry("quick_sort").unwrap().status, RunState::Failed);
    }
}
