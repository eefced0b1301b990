//! Run Executor
//!
//! Drives instrumented runs and turns them into terminal or file output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input values + algorithm names
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Runner / Comparator, progress display
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  metadata   │  Report metadata (version, host, timestamp)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Single runs and comparisons with progress display
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;

// Re-export public API
pub use execution::{execute_comparison, execute_single};
pub use formatting::{
    format_algorithm_list, format_duration, format_human_output, format_run_summary, format_steps,
};
pub use metadata::build_report_meta;
