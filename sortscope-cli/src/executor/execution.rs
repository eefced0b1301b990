//! Run Execution
//!
//! Thin wrappers around [`Runner`] and [`Comparator`] that add what a terminal
//! session needs: a progress bar while a comparison runs and step tracing
//! while a single run records.

use indicatif::{ProgressBar, ProgressStyle};
use sortscope_compare::{Comparator, Comparison};
use sortscope_core::{Algorithm, Runner};
use std::fmt::Debug;
use tracing::trace;

/// Run one algorithm over `input`.
///
/// The runner is returned whatever the outcome; a failed run carries its
/// reason in [`Runner::failure`].
pub fn execute_single<T>(algorithm: Algorithm, input: &[T]) -> Runner<T>
where
    T: PartialOrd + Clone + Debug,
{
    let mut runner = Runner::new(algorithm, input);
    let _ = runner.run_observed(|step| {
        trace!(step = step.number(), "{}", step.description());
    });
    runner
}

/// Execute every run of a comparison, showing progress on stderr
pub fn execute_comparison<T>(comparator: Comparator<T>, show_progress: bool) -> Comparison<T>
where
    T: PartialOrd + Clone + Debug + Send + Sync,
{
    let total = comparator.runners().len() as u64;
    let pb = if show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let comparison = comparator.execute_with(|runner| {
        pb.set_message(runner.algorithm().name());
        pb.inc(1);
    });

    pb.finish_with_message("Complete");
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::RunState;

    #[test]
    fn test_execute_single_keeps_failed_runner() {
        let runner = execute_single(Algorithm::SelectionSort, &[2.0, f64::NAN]);
        assert_eq!(runner.state(), RunState::Failed);
        assert!(runner.failure().is_some());
    }

    #[test]
    fn test_execute_comparison_hidden_progress() {
        let comparator = Comparator::new(&[3, 1, 2], Algorithm::ALL).unwrap();
        let comparison = execute_comparison(comparator, false);
        assert_eq!(comparison.runs().len(), 4);
        assert!(comparison.runs().iter().all(|r| r.state() == RunState::Completed));
    }
}
