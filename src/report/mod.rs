// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report output module

pub mod formatter;

use crate::validate::ValidationReport;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;

/// Save report to file as JSON
pub fn save_report<P: AsRef<Path>>(report: &ValidationReport, path: P) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(report, path)
}

/// Print report to console
pub fn print_report(report: &ValidationReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}
