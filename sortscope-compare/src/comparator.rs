//! Comparator
//!
//! Runs several algorithm variants over the same logical input.
//!
//! ## Data Flow
//!
//! ```text
//!  input ──copy──▶ Runner(merge_sort) ─┐
//!        ──copy──▶ Runner(quick_sort) ─┤  sequential or rayon fan-out
//!        ──copy──▶ Runner(...)        ─┘
//!                                      │  join: every run terminal
//!                                      ▼
//!                               Comparison ──▶ ComparisonReport
//! ```
//!
//! Every runner is constructed up front from the same slice, so all starting
//! copies are element-wise equal before any run begins. A failed run is kept
//! in the comparison and reported; it never aborts the others.

use crate::ranking::{ComparisonReport, RunSummary};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, AlgorithmRegistry, RunState, Runner};
use std::fmt::Debug;
use tracing::{debug, info};

/// How the runs of a comparison are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One run after another, in request order
    #[default]
    Sequential,
    /// All runs on the rayon pool, joined before reporting
    Parallel,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Construction-time misuse, reported before any run starts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparatorError {
    /// No variant was requested
    #[error("No algorithms selected for comparison")]
    NoAlgorithms,
    /// The same variant was requested twice (possibly through two names)
    #[error("Algorithm '{0}' requested more than once")]
    DuplicateAlgorithm(Algorithm),
    /// A name did not resolve through the registry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Orchestrates one run per variant over independent copies of one input
#[derive(Debug)]
pub struct Comparator<T> {
    dataset_size: usize,
    runners: Vec<Runner<T>>,
    mode: ExecutionMode,
}

impl<T> Comparator<T>
where
    T: PartialOrd + Clone + Debug,
{
    /// Prepare one runner per variant. Fails fast on an empty or duplicated set.
    pub fn new(
        input: &[T],
        algorithms: impl IntoIterator<Item = Algorithm>,
    ) -> Result<Self, ComparatorError> {
        let mut runners: Vec<Runner<T>> = Vec::new();
        for algorithm in algorithms {
            if runners.iter().any(|r| r.algorithm() == algorithm) {
                return Err(ComparatorError::DuplicateAlgorithm(algorithm));
            }
            runners.push(Runner::new(algorithm, input));
        }

        if runners.is_empty() {
            return Err(ComparatorError::NoAlgorithms);
        }

        Ok(Self {
            dataset_size: input.len(),
            runners,
            mode: ExecutionMode::default(),
        })
    }

    /// Resolve `names` through `registry`, then behave like [`Comparator::new`]
    pub fn from_names<S: AsRef<str>>(
        registry: &AlgorithmRegistry,
        input: &[T],
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, ComparatorError> {
        let algorithms = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                registry
                    .resolve(name)
                    .ok_or_else(|| ComparatorError::UnknownAlgorithm(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(input, algorithms)
    }

    /// Choose sequential or parallel execution
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<T> Comparator<T> {
    /// Requested variants in request order
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.runners.iter().map(Runner::algorithm)
    }

    /// Prepared runners, none of them started yet
    pub fn runners(&self) -> &[Runner<T>] {
        &self.runners
    }

    /// Scheduling mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

impl<T> Comparator<T>
where
    T: PartialOrd + Clone + Debug + Send + Sync,
{
    /// Run every variant to a terminal state
    pub fn execute(self) -> Comparison<T> {
        self.execute_with(|_| {})
    }

    /// Run every variant, calling `on_complete` once per finished run.
    ///
    /// In parallel mode the callback may be invoked from worker threads and
    /// in any order; the returned runs always follow request order.
    pub fn execute_with<F>(self, on_complete: F) -> Comparison<T>
    where
        F: Fn(&Runner<T>) + Sync,
    {
        let Self {
            dataset_size,
            mut runners,
            mode,
        } = self;

        debug!(runs = runners.len(), n = dataset_size, %mode, "comparison started");

        let execute_one = |runner: &mut Runner<T>| {
            // Failures stay recorded on the runner
            if let Err(e) = runner.run() {
                debug!(algorithm = %runner.algorithm(), error = %e, "run ended with failure");
            }
            on_complete(runner);
        };

        match mode {
            ExecutionMode::Sequential => runners.iter_mut().for_each(execute_one),
            ExecutionMode::Parallel => runners.par_iter_mut().for_each(execute_one),
        }

        let comparison = Comparison {
            dataset_size,
            mode,
            runs: runners,
        };
        info!(
            runs = comparison.runs.len(),
            failed = comparison.failed_count(),
            "comparison finished"
        );
        comparison
    }
}

/// All runs of one comparison, every one of them terminal
#[derive(Debug)]
pub struct Comparison<T> {
    dataset_size: usize,
    mode: ExecutionMode,
    runs: Vec<Runner<T>>,
}

impl<T> Comparison<T> {
    /// Finished runs in request order
    pub fn runs(&self) -> &[Runner<T>] {
        &self.runs
    }

    /// Run of one variant
    pub fn run(&self, algorithm: Algorithm) -> Option<&Runner<T>> {
        self.runs.iter().find(|r| r.algorithm() == algorithm)
    }

    /// Number of input elements
    pub fn dataset_size(&self) -> usize {
        self.dataset_size
    }

    /// Number of failed runs
    pub fn failed_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| r.state() == RunState::Failed)
            .count()
    }

    /// Rank the runs
    pub fn report(&self) -> ComparisonReport {
        let entries = self.runs.iter().map(RunSummary::from_runner).collect();
        ComparisonReport::from_summaries(self.dataset_size, self.mode, entries)
    }
}
