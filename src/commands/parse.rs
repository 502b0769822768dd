//! Parse command implementation.
//!
//! Parses a trace and writes the messages as a JSON document.

use super::models::ParseArgs;
use super::utils::load_messages;
use crate::aggregator::MessageStats;
use crate::output::write_document;
use crate::parser::TraceDocument;
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The document that was written
pub fn execute_parse(args: ParseArgs) -> Result<TraceDocument> {
    let start_time = Instant::now();

    info!("Step 1/2: Parsing trace {}...", args.trace_path.display());
    let (messages, skipped) = load_messages(&args.trace_path, args.keep_going)?;
    if skipped > 0 {
        warn!("Skipped {} unparsable chunk(s)", skipped);
    }

    let stats = MessageStats::from_messages(&messages);
    info!("Messages: {}", stats.summary());

    info!("Step 2/2: Writing document...");
    let document = TraceDocument::new(args.trace_path.display().to_string(), messages);
    write_document(&document, &args.output_json)
        .context("Failed to write trace document")?;

    info!("✓ Document written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRACE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Trace:          {}", args.trace_path.display());
        println!("Messages:       {}", stats.total);
        println!("Signals:        {}", stats.signals);
        println!("Method calls:   {}", stats.method_calls);
        println!("Bare calls:     {}", stats.bare_calls);
        println!("Method returns: {}", stats.method_returns);
        println!("Functions:      {}", stats.distinct_functions);
        if skipped > 0 {
            println!("Skipped chunks: {}", skipped);
        }
        println!("{}", "=".repeat(80));
    }

    info!("Parse completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(document)
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_parse_args(args: &ParseArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.trace_path == args.output_json {
        anyhow::bail!("Output path would overwrite the trace file");
    }

    Ok(())
}
