//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod parse;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{ParseArgs, ReportArgs};
pub use parse::{execute_parse, validate_parse_args};
pub use report::{execute_report, generate_report, validate_report_args, RenderedReport};
pub use utils::{
    display_schema, display_version, load_messages, read_trace, validate_document_file,
};
