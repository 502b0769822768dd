//! Configuration and constants for the parser and the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// A line opens a new message iff it starts with one of these (after the
// timestamp prefix is stripped).
pub const BOUNDARY_TOKENS: &[&str] = &[
    "signal sender",
    "method call sender",
    "method return sender",
];

/// Members selected for the signal table
pub const DEFAULT_SIGNAL_MEMBERS: &[&str] = &["Emit"];

/// Members selected for the method table
pub const DEFAULT_METHOD_MEMBERS: &[&str] = &["Invoke", "AddMatch"];

// Column titles used by the report tables
pub const OCCURRENCES_SIGNAL_COLUMN: &str = "Occurences";
pub const OCCURRENCES_COLUMN: &str = "Occurrence";
pub const PATH_COLUMN: &str = "Path";
pub const SENDER_COLUMN: &str = "Sender";
pub const DESTINATION_COLUMN: &str = "Destination";
pub const SERVICES_COLUMN: &str = "Services";
