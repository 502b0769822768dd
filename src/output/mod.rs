//! Output writers for parsed traces.
//!
//! This module handles:
//! - Plain-text report tables (delimited, aligned, pretty)
//! - JSON trace documents

pub mod json;
pub mod report;
pub mod table;

// Re-export main functions
pub use json::{document_to_string, read_document, write_document};
pub use report::{build_report, render_report, ReportConfig};
pub use table::{Table, TableFormat};
