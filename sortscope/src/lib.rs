#![warn(missing_docs)]
//! # Sortscope
//!
//! Instrumented sorting algorithms with replayable steps and ranked comparisons.
//!
//! Sortscope runs a sorting routine over a private copy of its input and
//! records everything it does:
//! - **Steps**: every comparison, swap and placement, with a full array snapshot
//! - **Metrics**: comparisons, swaps, array accesses, auxiliary memory and wall time
//! - **Failure isolation**: unorderable values or a panicking comparison fail one run, not the process
//! - **Comparisons**: several variants over identical input, ranked per metric
//! - **Exports**: JSON analysis documents and JSON/CSV comparison reports
//!
//! ## Quick Start
//!
//! ```ignore
//! use sortscope::prelude::*;
//!
//! let mut runner = Runner::new(Algorithm::MergeSort, &[64, 34, 25, 12, 22, 11, 90]);
//! let sorted = runner.run()?;
//! assert_eq!(sorted, &[11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(runner.metrics().comparisons(), 14);
//! ```
//!
//! ## Comparing Variants
//!
//! ```ignore
//! let comparison = Comparator::new(&data, Algorithm::ALL)?.execute();
//! let report = comparison.report();
//! println!("best: {:?}", report.best);
//! ```

// Re-export core types
pub use sortscope_core::{
    Algorithm, AlgorithmInfo, AlgorithmRegistry, AnalysisExport, AnalysisSummary, Metrics,
    Mutation, RunError, RunOutcome, RunState, Runner, Step, StepExport, StepObserver, Timer,
};

// Re-export comparison types
pub use sortscope_compare::{
    Comparator, ComparatorError, Comparison, ComparisonReport, ExecutionMode, RankingMetric,
    Rankings, RunSummary, rank_by, select_best,
};

// Re-export reporting
pub use sortscope_report::{
    OutputFormat, Report, ReportError, ReportMeta, generate_analysis_json, generate_csv_report,
    generate_json_report, load_analysis, write_analysis,
};

// Re-export the command line entry point
pub use sortscope_cli::run;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, Comparator, ExecutionMode, Metrics, RunError, RunState, Runner, Step,
    };
}
