use crate::output::ReportConfig;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Trace file to read
    pub trace_path: PathBuf,

    /// Member filters and table layout
    pub config: ReportConfig,

    /// Skip unparsable chunks instead of failing
    pub keep_going: bool,
}

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Trace file to read
    pub trace_path: PathBuf,

    /// Output path for the JSON document
    pub output_json: PathBuf,

    /// Skip unparsable chunks instead of failing
    pub keep_going: bool,

    /// Print message statistics to stdout
    pub print_summary: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::new(),
            output_json: PathBuf::from("messages.json"),
            keep_going: false,
            print_summary: false,
        }
    }
}
