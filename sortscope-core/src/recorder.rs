//! Instrumentation Recorder
//!
//! The recorder owns the working array for the duration of a run. Algorithm
//! bodies never touch the array directly: every order test goes through
//! [`Recorder::compare`] or [`Recorder::order`], every mutation through
//! [`Recorder::swap`] or [`Recorder::place`]. Each of these updates the
//! metrics and appends the matching step in one place, which is what keeps
//! counters and step records in lockstep.

use crate::error::RunError;
use crate::measure::Timer;
use crate::metrics::Metrics;
use crate::step::{Mutation, Step};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Callback receiving each step as soon as it is recorded
pub type StepObserver<'a, T> = &'a mut dyn FnMut(&Step<T>);

pub(crate) struct Recorder<'a, T> {
    data: Vec<T>,
    steps: Vec<Step<T>>,
    metrics: Metrics,
    timer: Timer,
    observer: Option<StepObserver<'a, T>>,
}

impl<'a, T> Recorder<'a, T>
where
    T: PartialOrd + Clone + Debug,
{
    pub(crate) fn new(data: Vec<T>, observer: Option<StepObserver<'a, T>>) -> Self {
        Self {
            data,
            steps: Vec::new(),
            metrics: Metrics::new(),
            timer: Timer::start(),
            observer,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn value(&self, index: usize) -> &T {
        &self.data[index]
    }

    pub(crate) fn slice(&self, range: std::ops::Range<usize>) -> &[T] {
        &self.data[range]
    }

    #[cfg(test)]
    pub(crate) fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[cfg(test)]
    pub(crate) fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Record a narrative step; metrics are untouched
    pub(crate) fn milestone(&mut self, description: impl Into<String>, highlighted: Vec<usize>) {
        let step = self.next_step(description.into()).with_highlighted(highlighted);
        self.push(step);
    }

    /// Order `arr[i]` against `arr[j]`, recording the comparison and its step
    pub(crate) fn compare(
        &mut self,
        i: usize,
        j: usize,
        description: String,
        highlighted: Vec<usize>,
    ) -> Result<Ordering, RunError> {
        let ordering = self.test_order(&self.data[i], &self.data[j], (i, j))?;
        self.metrics.record_comparison();
        let step = self
            .next_step(description)
            .with_comparison((i, j))
            .with_highlighted(highlighted);
        self.push(step);
        Ok(ordering)
    }

    /// Order two values held outside the working array (merge buffers).
    ///
    /// Records the comparison metric only; the caller must emit the step
    /// that carries `at` as its comparison pair (see [`Recorder::place`]).
    pub(crate) fn order(&mut self, a: &T, b: &T, at: (usize, usize)) -> Result<Ordering, RunError> {
        let ordering = self.test_order(a, b, at)?;
        self.metrics.record_comparison();
        Ok(ordering)
    }

    /// Exchange two positions. `i == j` is recorded as a self-swap.
    pub(crate) fn swap(&mut self, i: usize, j: usize, description: String) {
        self.data.swap(i, j);
        self.metrics.record_swap();
        let step = self
            .next_step(description)
            .with_swap((i, j), Mutation::Swap { i, j });
        self.push(step);
    }

    /// Write `value` (taken from `source` in an auxiliary buffer) to `index`
    pub(crate) fn place(
        &mut self,
        index: usize,
        source: usize,
        value: T,
        compared: Option<(usize, usize)>,
        description: String,
    ) {
        self.data[index] = value.clone();
        self.metrics.record_placement();
        let mut step = self
            .next_step(description)
            .with_swap((index, source), Mutation::Write { index, value });
        if let Some(pair) = compared {
            step = step.with_comparison(pair);
        }
        self.push(step);
    }

    pub(crate) fn auxiliary(&mut self, slots: u64) {
        self.metrics.record_auxiliary(slots);
    }

    /// Hand back the working array, steps and metrics
    pub(crate) fn finish(self) -> (Vec<T>, Vec<Step<T>>, Metrics) {
        (self.data, self.steps, self.metrics)
    }

    fn test_order(&self, a: &T, b: &T, at: (usize, usize)) -> Result<Ordering, RunError> {
        a.partial_cmp(b).ok_or_else(|| RunError::Unorderable {
            left: at.0,
            right: at.1,
            left_value: format!("{:?}", a),
            right_value: format!("{:?}", b),
        })
    }

    fn next_step(&self, description: String) -> Step<T> {
        Step::new(
            self.steps.len() as u64 + 1,
            description,
            self.data.clone(),
            self.timer.elapsed(),
        )
    }

    fn push(&mut self, step: Step<T>) {
        self.steps.push(step);
        if let (Some(observer), Some(step)) = (self.observer.as_mut(), self.steps.last()) {
            observer(step);
        }
    }
}
