//! Builds the report tables from parsed messages.
//!
//! The report has three sections:
//! 1. Signals (member filter, grouped by function, with path)
//! 2. Methods (member filter, grouped by function, with sender and dest)
//! 3. Services (message counts per path)

use super::table::{Table, TableFormat};
use crate::aggregator::{
    count_by_path, filter_by_member, summarize_by_function, FunctionSummary, ServiceCount,
};
use crate::parser::Message;
use crate::utils::config::{
    DEFAULT_METHOD_MEMBERS, DEFAULT_SIGNAL_MEMBERS, DESTINATION_COLUMN, OCCURRENCES_COLUMN,
    OCCURRENCES_SIGNAL_COLUMN, PATH_COLUMN, SENDER_COLUMN, SERVICES_COLUMN,
};
use log::debug;

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Members selecting the signal table
    pub signal_members: Vec<String>,

    /// Members selecting the method table
    pub method_members: Vec<String>,

    /// Table layout
    pub format: TableFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            signal_members: DEFAULT_SIGNAL_MEMBERS.iter().map(|s| s.to_string()).collect(),
            method_members: DEFAULT_METHOD_MEMBERS.iter().map(|s| s.to_string()).collect(),
            format: TableFormat::default(),
        }
    }
}

/// Build all report tables, in display order
///
/// **Public** - main entry point for report generation
pub fn build_report(messages: &[Message], config: &ReportConfig) -> Vec<Table> {
    let signals = summarize_by_function(filter_by_member(messages, &config.signal_members));
    let methods = summarize_by_function(filter_by_member(messages, &config.method_members));
    let services = count_by_path(messages);

    debug!(
        "Report rows: {} signal functions, {} method functions, {} services",
        signals.len(),
        methods.len(),
        services.len()
    );

    vec![
        signal_table(&signals, first_member(&config.signal_members)),
        method_table(&methods, first_member(&config.method_members)),
        services_table(&services),
    ]
}

/// Render tables separated by a blank line
pub fn render_report(tables: &[Table], format: TableFormat) -> String {
    tables
        .iter()
        .map(|table| table.render(format))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Function, occurrence count and path per signal function
pub fn signal_table(summaries: &[FunctionSummary], member: &str) -> Table {
    let mut table = Table::new([
        format!("Signals: (Member={})", member),
        OCCURRENCES_SIGNAL_COLUMN.to_string(),
        PATH_COLUMN.to_string(),
    ]);
    for summary in summaries {
        table.push_row(vec![
            summary.function.clone(),
            summary.occurrences.to_string(),
            summary.path.clone(),
        ]);
    }
    table
}

/// Function, occurrence count, sender and destination per method function
pub fn method_table(summaries: &[FunctionSummary], member: &str) -> Table {
    let mut table = Table::new([
        format!("Methods: (Member={})", member),
        OCCURRENCES_COLUMN.to_string(),
        SENDER_COLUMN.to_string(),
        DESTINATION_COLUMN.to_string(),
    ]);
    for summary in summaries {
        table.push_row(vec![
            summary.function.clone(),
            summary.occurrences.to_string(),
            summary.sender.clone(),
            summary.dest.clone(),
        ]);
    }
    table
}

/// Occurrence count per path
pub fn services_table(counts: &[ServiceCount]) -> Table {
    let mut table = Table::new([SERVICES_COLUMN, OCCURRENCES_COLUMN]);
    for count in counts {
        table.push_row(vec![count.path.clone(), count.occurrences.to_string()]);
    }
    table
}

fn first_member(members: &[String]) -> &str {
    members.first().map(String::as_str).unwrap_or("")
}
