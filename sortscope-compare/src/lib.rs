#![warn(missing_docs)]
//! Sortscope Compare - Ranked Comparisons
//!
//! Runs several instrumented algorithm variants over the same input:
//! - Fairness: every run starts from an identical private copy
//! - Sequential or rayon-parallel execution with a join before reporting
//! - Per-metric rankings with alphabetical tie-breaks
//! - Composite "best overall" (time, then comparisons)
//! - Partial-failure tolerance: failed runs are reported, not fatal

mod comparator;
mod ranking;

pub use comparator::{Comparator, ComparatorError, Comparison, ExecutionMode};
pub use ranking::{ComparisonReport, RankingMetric, Rankings, RunSummary, rank_by, select_best};
