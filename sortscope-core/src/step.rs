//! Step Records
//!
//! A [`Step`] is an immutable snapshot of the working array at one observable
//! instant of a run. Steps are only constructed by the recorder; consumers get
//! shared references and cannot alter them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Array mutation applied by a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Mutation<T> {
    /// Exchange of two positions (`i == j` is a recorded self-swap)
    Swap {
        /// First position
        i: usize,
        /// Second position
        j: usize,
    },
    /// Overwrite of one position with a value from an auxiliary buffer
    Write {
        /// Target position
        index: usize,
        /// Value written
        value: T,
    },
}

impl<T: Clone> Mutation<T> {
    /// Apply this mutation to `array` in place
    pub fn apply(&self, array: &mut [T]) {
        match self {
            Mutation::Swap { i, j } => array.swap(*i, *j),
            Mutation::Write { index, value } => array[*index] = value.clone(),
        }
    }
}

/// Snapshot of algorithm state at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    number: u64,
    description: String,
    snapshot: Vec<T>,
    highlighted: Vec<usize>,
    comparison: Option<(usize, usize)>,
    swapped: Option<(usize, usize)>,
    mutation: Option<Mutation<T>>,
    elapsed: Duration,
}

impl<T> Step<T> {
    pub(crate) fn new(
        number: u64,
        description: String,
        snapshot: Vec<T>,
        elapsed: Duration,
    ) -> Self {
        Self {
            number,
            description,
            snapshot,
            highlighted: Vec::new(),
            comparison: None,
            swapped: None,
            mutation: None,
            elapsed,
        }
    }

    pub(crate) fn with_highlighted(mut self, highlighted: Vec<usize>) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub(crate) fn with_comparison(mut self, pair: (usize, usize)) -> Self {
        self.comparison = Some(pair);
        self
    }

    pub(crate) fn with_swap(mut self, pair: (usize, usize), mutation: Mutation<T>) -> Self {
        self.swapped = Some(pair);
        self.mutation = Some(mutation);
        self
    }

    /// 1-based sequence number, gapless within a run
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Human-readable label of what happened
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full copy of the working array after this step
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    /// Positions relevant to this step (may be empty)
    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    /// Pair of positions just compared.
    ///
    /// Merge sort compares values held in its auxiliary buffer, so its pairs
    /// name the positions those values occupied when the current merge began
    /// (the snapshot of the preceding "Merging" milestone), not necessarily
    /// what the previous snapshot holds there.
    pub fn comparison(&self) -> Option<(usize, usize)> {
        self.comparison
    }

    /// Pair of positions just exchanged, or `(target, source)` for a placement
    pub fn swapped(&self) -> Option<(usize, usize)> {
        self.swapped
    }

    /// Mutation that turned the previous snapshot into this one
    pub fn mutation(&self) -> Option<&Mutation<T>> {
        self.mutation.as_ref()
    }

    /// Time since the start of the run
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether this step only narrates structure (no comparison, no mutation)
    pub fn is_milestone(&self) -> bool {
        self.comparison.is_none() && self.mutation.is_none()
    }
}
