#![warn(missing_docs)]
//! Sortscope Report - Output Documents
//!
//! Generates the output formats of a comparison:
//! - JSON (machine-readable, full report with metadata)
//! - CSV (one row per run, spreadsheet-compatible)
//!
//! and reads/writes single-run analysis documents for external renderers.
//! Human-readable terminal output is rendered by the CLI.

mod csv;
mod error;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use error::ReportError;
pub use json::{generate_analysis_json, generate_json_report, load_analysis, write_analysis};
pub use report::{Report, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    #[default]
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Human => write!(f, "human"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!(
            "yaml".parse::<OutputFormat>().unwrap_err(),
            "Unknown output format: yaml"
        );
    }
}
