//! JSON Output

use crate::error::ReportError;
use crate::report::Report;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sortscope_core::AnalysisExport;
use std::path::Path;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize a single-run analysis document
pub fn generate_analysis_json<T: Serialize>(
    analysis: &AnalysisExport<T>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

/// Write an analysis document to `path`, replacing any existing file
pub fn write_analysis<T: Serialize>(
    path: &Path,
    analysis: &AnalysisExport<T>,
) -> Result<(), ReportError> {
    let json = generate_analysis_json(analysis)?;
    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an analysis document previously written by [`write_analysis`]
pub fn load_analysis<T: DeserializeOwned>(path: &Path) -> Result<AnalysisExport<T>, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
