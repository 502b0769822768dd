use crate::aggregator::MessageStats;
use crate::output::read_document;
use crate::parser::{parse_messages, parse_messages_lenient, Message};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::InputError;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Read a trace file as text
///
/// Invalid UTF-8 is replaced rather than rejected; monitor dumps can carry
/// arbitrary bytes inside string parameters.
pub fn read_trace(path: &Path) -> Result<String, InputError> {
    if !path.is_file() {
        return Err(InputError::NotAFile(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("Trace {} is not valid UTF-8, replacing invalid bytes", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Read and parse a trace file
///
/// Returns the messages and the number of skipped chunks (always 0 unless
/// `keep_going` is set).
pub fn load_messages(path: &Path, keep_going: bool) -> Result<(Vec<Message>, usize)> {
    let raw = read_trace(path)
        .with_context(|| format!("Failed to read trace {}", path.display()))?;

    if keep_going {
        let outcome = parse_messages_lenient(&raw);
        let skipped = outcome.skipped.len();
        return Ok((outcome.messages, skipped));
    }

    let messages = parse_messages(&raw)
        .with_context(|| format!("Failed to parse trace {}", path.display()))?;
    Ok((messages, 0))
}

/// Validate a trace document JSON file
pub fn validate_document_file(file_path: PathBuf) -> Result<()> {
    println!("Validating document: {}", file_path.display());

    let document = read_document(&file_path)
        .with_context(|| format!("Failed to read document {}", file_path.display()))?;

    if document.message_count != document.messages.len() {
        anyhow::bail!(
            "message_count is {} but document holds {} messages",
            document.message_count,
            document.messages.len()
        );
    }

    let stats = MessageStats::from_messages(&document.messages);

    println!("✓ Valid trace document");
    println!("  Version: {}", document.version);
    println!("  Source: {}", document.source);
    println!("  Messages: {}", stats.total);
    println!("  Signals: {}", stats.signals);
    println!("  Method Calls: {}", stats.method_calls + stats.bare_calls);
    println!("  Method Returns: {}", stats.method_returns);
    println!("  Distinct Functions: {}", stats.distinct_functions);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("D-Bus Trace Report Document Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Trace file the messages came from");
        println!("  message_count: number    - Number of messages");
        println!("  messages: array          - Messages in trace order");
        println!("    type: string           - signal | method_call | method_return | bare_call");
        println!("    sender: string         - Sending connection");
        println!("    dest: string           - Destination");
        println!("    serial: string?        - Serial (not on method_return)");
        println!("    reply_serial: string?  - Replied serial (method_return only)");
        println!("    path: string?          - Object path");
        println!("    interface: string?     - Interface");
        println!("    member: string?        - Member");
        println!("    function: string?      - First string parameter, quoted");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("D-Bus Trace Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Document Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Message counts and function tables from captured D-Bus monitor traces.");
}
