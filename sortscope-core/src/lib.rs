#![warn(missing_docs)]
//! Sortscope Core - Instrumented Runs
//!
//! This crate turns plain sorting routines into observable, replayable runs:
//! - `Runner` lifecycle (NotStarted → Running → Completed | Failed)
//! - `Step` records with full array snapshots and the mutation that produced them
//! - `Metrics` counters that can only move forward
//! - Four algorithm variants sharing one instrumentation contract
//! - `AlgorithmRegistry` for explicit name → variant resolution
//! - `AnalysisExport` documents for external renderers

mod algorithms;
mod error;
mod export;
mod measure;
mod metrics;
mod recorder;
mod run;
mod step;

pub use algorithms::{Algorithm, AlgorithmInfo, AlgorithmRegistry};
pub use error::RunError;
pub use export::{AnalysisExport, AnalysisSummary, StepExport};
pub use measure::Timer;
pub use metrics::Metrics;
pub use recorder::StepObserver;
pub use run::{RunOutcome, RunState, Runner};
pub use step::{Mutation, Step};
