//! Run Lifecycle
//!
//! A [`Runner`] binds one algorithm variant to one private copy of the input
//! and walks a one-way state machine:
//!
//! ```text
//!  NotStarted ──run()──▶ Running ──ok──▶ Completed
//!                           │
//!                           └──fault──▶ Failed
//! ```
//!
//! `run()` is accepted exactly once. Faults raised inside the algorithm body
//! (unorderable values, panics from a user `PartialOrd`) are caught here and
//! recorded as the run's failure instead of unwinding into the caller.

use crate::algorithms::{Algorithm, AlgorithmInfo};
use crate::error::RunError;
use crate::measure::Timer;
use crate::metrics::Metrics;
use crate::recorder::Recorder;
use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, warn};

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Constructed, `run()` not yet called
    NotStarted,
    /// Algorithm body executing
    Running,
    /// Finished normally; result and metrics are final
    Completed,
    /// Finished with a fault; see [`Runner::failure`]
    Failed,
}

impl RunState {
    /// Whether the run can no longer change
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::NotStarted => write!(f, "not started"),
            RunState::Running => write!(f, "running"),
            RunState::Completed => write!(f, "completed"),
            RunState::Failed => write!(f, "failed"),
        }
    }
}

/// Terminal view of a run
#[derive(Debug, PartialEq)]
pub enum RunOutcome<'a, T> {
    /// Sorted output and final metrics
    Completed {
        /// Sorted sequence
        result: &'a [T],
        /// Final metrics
        metrics: &'a Metrics,
    },
    /// Recorded fault
    Failed {
        /// Why the run failed
        reason: &'a RunError,
    },
}

/// One execution of one algorithm over one private copy of the input
#[derive(Debug, Clone)]
pub struct Runner<T> {
    algorithm: Algorithm,
    input: Vec<T>,
    state: RunState,
    steps: Vec<Step<T>>,
    metrics: Metrics,
    result: Option<Vec<T>>,
    failure: Option<RunError>,
}

impl<T> Runner<T>
where
    T: PartialOrd + Clone + Debug,
{
    /// Create a runner over a copy of `input`; the caller's slice is never touched
    pub fn new(algorithm: Algorithm, input: &[T]) -> Self {
        Self {
            algorithm,
            input: input.to_vec(),
            state: RunState::NotStarted,
            steps: Vec::new(),
            metrics: Metrics::new(),
            result: None,
            failure: None,
        }
    }

    /// Execute the algorithm to completion and return the sorted sequence
    pub fn run(&mut self) -> Result<&[T], RunError> {
        self.execute(None)
    }

    /// Like [`Runner::run`], handing every step to `observer` as it is recorded
    pub fn run_observed<F>(&mut self, mut observer: F) -> Result<&[T], RunError>
    where
        F: FnMut(&Step<T>),
    {
        self.execute(Some(&mut observer))
    }

    fn execute(&mut self, observer: Option<&mut dyn FnMut(&Step<T>)>) -> Result<&[T], RunError> {
        if self.state != RunState::NotStarted {
            return Err(RunError::Reuse { state: self.state });
        }
        self.state = RunState::Running;

        let algorithm = self.algorithm;
        let n = self.input.len();
        debug!(algorithm = %algorithm, n, "run started");

        let mut recorder = Recorder::new(self.input.clone(), observer);
        recorder.milestone(
            format!("Starting {}", algorithm.info().display_name),
            (0..n).collect(),
        );

        let timer = Timer::start();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            algorithm.sort(&mut recorder)
        }));
        let elapsed = timer.elapsed();

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Err(RunError::Panicked(message))
            }
        };

        if outcome.is_ok() {
            recorder.milestone(
                format!("{} complete", algorithm.info().display_name),
                (0..n).collect(),
            );
        }

        let (data, steps, mut metrics) = recorder.finish();
        metrics.set_execution_time(elapsed);
        self.steps = steps;
        self.metrics = metrics;

        match outcome {
            Ok(()) => {
                self.state = RunState::Completed;
                debug!(
                    algorithm = %algorithm,
                    comparisons = self.metrics.comparisons(),
                    swaps = self.metrics.swaps(),
                    steps = self.steps.len(),
                    "run completed"
                );
                Ok(self.result.insert(data).as_slice())
            }
            Err(err) => {
                self.state = RunState::Failed;
                warn!(algorithm = %algorithm, error = %err, "run failed");
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }
}

impl<T> Runner<T> {
    /// Algorithm variant bound to this run
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Complexity and stability information for the bound variant
    pub fn algorithm_info(&self) -> AlgorithmInfo {
        self.algorithm.info()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The run's private, unmodified copy of the input
    pub fn input(&self) -> &[T] {
        &self.input
    }

    /// Recorded steps (empty before `run()`, frozen once terminal)
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Metrics as currently recorded (zeroed before `run()`)
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Final metrics; only available once the run completed
    pub fn final_metrics(&self) -> Result<&Metrics, RunError> {
        self.ensure_completed().map(|_| &self.metrics)
    }

    /// Sorted output; only available once the run completed
    pub fn result(&self) -> Result<&[T], RunError> {
        self.ensure_completed()?;
        self.result
            .as_deref()
            .ok_or(RunError::NotReady { state: self.state })
    }

    /// Fault recorded by a failed run
    pub fn failure(&self) -> Option<&RunError> {
        self.failure.as_ref()
    }

    /// Terminal outcome, `None` while the run has not finished
    pub fn outcome(&self) -> Option<RunOutcome<'_, T>> {
        match (&self.result, &self.failure) {
            (Some(result), _) => Some(RunOutcome::Completed {
                result,
                metrics: &self.metrics,
            }),
            (None, Some(reason)) => Some(RunOutcome::Failed { reason }),
            (None, None) => None,
        }
    }

    fn ensure_completed(&self) -> Result<(), RunError> {
        match (self.state, &self.failure) {
            (RunState::Completed, _) => Ok(()),
            (RunState::Failed, Some(failure)) => Err(failure.clone()),
            (state, _) => Err(RunError::NotReady { state }),
        }
    }
}
