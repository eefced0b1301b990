//! System Metadata Collection
//!
//! Collects the host description and timestamp stored in report metadata.
//! Everything here is cheap and portable; no platform-specific probing.

use chrono::Utc;
use sortscope_report::{ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata for the current host
pub fn build_report_meta() -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
