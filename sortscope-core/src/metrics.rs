//! Run Metrics
//!
//! Counters accumulated by a single run. Counters only ever move forward:
//! there is no setter, only `record_*` operations, so a caller holding a
//! `&mut Metrics` can never produce an inconsistent count. Execution time is
//! stamped by the runner once the sort body returns.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate counters and timing for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    execution_time: Duration,
    memory_estimate: u64,
}

impl Metrics {
    /// Fresh, zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one element-order test (two reads)
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
        self.array_accesses += 2;
    }

    /// Count one position exchange (two reads, two writes)
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
        self.array_accesses += 4;
    }

    /// Count one placement from an auxiliary buffer (one read, one write)
    ///
    /// Placements are reported under `swaps`, they are the merge-phase
    /// equivalent of an exchange.
    #[inline]
    pub fn record_placement(&mut self) {
        self.swaps += 1;
        self.array_accesses += 2;
    }

    /// Raise the auxiliary storage high-water mark (slots: buffer elements or
    /// recursion frames). Lower values are ignored.
    #[inline]
    pub fn record_auxiliary(&mut self, slots: u64) {
        self.memory_estimate = self.memory_estimate.max(slots);
    }

    pub(crate) fn set_execution_time(&mut self, elapsed: Duration) {
        self.execution_time = elapsed;
    }

    /// Element-order tests performed
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Exchanges (and merge placements) performed
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Read/write touches of the working array
    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    /// Wall-clock duration of the sort body
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Peak auxiliary storage in slots
    pub fn memory_estimate(&self) -> u64 {
        self.memory_estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut metrics = Metrics::new();
        metrics.record_comparison();
        metrics.record_comparison();
        metrics.record_swap();
        metrics.record_placement();

        assert_eq!(metrics.comparisons(), 2);
        assert_eq!(metrics.swaps(), 2);
        assert_eq!(metrics.array_accesses(), 2 * 2 + 4 + 2);
    }

    #[test]
    fn test_auxiliary_is_high_water_mark() {
        let mut metrics = Metrics::new();
        metrics.record_auxiliary(4);
        metrics.record_auxiliary(9);
        metrics.record_auxiliary(2);
        assert_eq!(metrics.memory_estimate(), 9);
    }
}
