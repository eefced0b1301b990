//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortscope_compare::ComparisonReport;

/// Version of the report document layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete comparison report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Where and when the report was produced
    pub meta: ReportMeta,
    /// Rankings and per-run summaries
    pub comparison: ComparisonReport,
}

impl Report {
    /// Combine metadata and a comparison
    pub fn new(meta: ReportMeta, comparison: ComparisonReport) -> Self {
        Self { meta, comparison }
    }
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Document layout version
    pub schema_version: u32,
    /// Version of the tool that produced the report
    pub version: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Host description
    pub system: SystemInfo,
}

/// System information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system family
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Logical cores available to the process
    pub cpu_cores: u32,
}
