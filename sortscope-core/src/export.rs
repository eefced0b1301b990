//! Analysis Export
//!
//! Self-contained document describing one run: identity, final counters and
//! every recorded step. Serialized in camelCase so an external renderer can
//! replay it without knowing anything about this crate.

use crate::algorithms::{Algorithm, AlgorithmInfo};
use crate::run::{RunState, Runner};
use crate::step::Step;
use serde::{Deserialize, Serialize};

/// Replayable description of a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport<T> {
    /// Variant identifier
    pub algorithm: Algorithm,
    /// Complexity and stability information
    pub info: AlgorithmInfo,
    /// Lifecycle state at export time
    pub status: RunState,
    /// Number of input elements
    pub input_size: usize,
    /// Final counters
    pub summary: AnalysisSummary,
    /// Every recorded step in order
    pub steps: Vec<StepExport<T>>,
    /// Failure reason, present only for failed runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Counters of an exported run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Element-order tests
    pub comparisons: u64,
    /// Exchanges and merge placements
    pub swaps: u64,
    /// Read/write touches of the working array
    pub array_accesses: u64,
    /// Sort body duration in seconds
    pub execution_time_seconds: f64,
    /// Peak auxiliary storage in slots
    pub memory_estimate: u64,
    /// Number of recorded steps
    pub total_steps: u64,
}

/// One exported step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepExport<T> {
    /// 1-based sequence number
    pub step_number: u64,
    /// What happened
    pub description: String,
    /// Working array after the step
    pub array_snapshot: Vec<T>,
    /// Positions to emphasise
    pub highlighted: Vec<usize>,
    /// Pair just compared; for merge sort, positions as of the start of the
    /// current merge
    pub comparison_indices: Option<(usize, usize)>,
    /// Pair just exchanged, or `(target, source)` for a placement
    pub swapped_indices: Option<(usize, usize)>,
}

impl<T: Clone> From<&Step<T>> for StepExport<T> {
    fn from(step: &Step<T>) -> Self {
        Self {
            step_number: step.number(),
            description: step.description().to_string(),
            array_snapshot: step.snapshot().to_vec(),
            highlighted: step.highlighted().to_vec(),
            comparison_indices: step.comparison(),
            swapped_indices: step.swapped(),
        }
    }
}

impl<T: Clone> Runner<T> {
    /// Build the analysis document for this run.
    ///
    /// Valid in any state; a run that has not started exports zero counters
    /// and no steps.
    pub fn export_analysis(&self) -> AnalysisExport<T> {
        let metrics = self.metrics();
        AnalysisExport {
            algorithm: self.algorithm(),
            info: self.algorithm_info(),
            status: self.state(),
            input_size: self.input().len(),
            summary: AnalysisSummary {
                comparisons: metrics.comparisons(),
                swaps: metrics.swaps(),
                array_accesses: metrics.array_accesses(),
                execution_time_seconds: metrics.execution_time().as_secs_f64(),
                memory_estimate: metrics.memory_estimate(),
                total_steps: self.steps().len() as u64,
            },
            steps: self.steps().iter().map(StepExport::from).collect(),
            failure: self.failure().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_field_names() {
        let mut runner = Runner::new(Algorithm::SelectionSort, &[2, 1]);
        runner.run().unwrap();

        let value = serde_json::to_value(runner.export_analysis()).unwrap();
        assert_eq!(value["algorithm"], "selection_sort");
        assert_eq!(value["status"], "completed");
        assert_eq!(value["inputSize"], 2);
        assert_eq!(value["summary"]["comparisons"], 1);
        assert_eq!(value["summary"]["swaps"], 1);
        assert!(value["summary"]["executionTimeSeconds"].is_f64());
        assert!(value.get("failure").is_none());

        let first = &value["steps"][0];
        assert_eq!(first["stepNumber"], 1);
        assert_eq!(first["arraySnapshot"], serde_json::json!([2, 1]));
        assert!(first["comparisonIndices"].is_null());
    }

    #[test]
    fn test_export_failed_run() {
        let mut runner = Runner::new(Algorithm::QuickSort, &[f64::NAN, 1.0]);
        let _ = runner.run();

        let export = runner.export_analysis();
        assert_eq!(export.status, RunState::Failed);
        assert!(export.failure.unwrap().contains("cannot order"));
    }

    #[test]
    fn test_export_not_started() {
        let runner = Runner::new(Algorithm::MergeSort, &[3, 1, 2]);
        let export = runner.export_analysis();
        assert_eq!(export.status, RunState::NotStarted);
        assert_eq!(export.input_size, 3);
        assert!(export.steps.is_empty());
        assert_eq!(export.summary.total_steps, 0);
    }
}
