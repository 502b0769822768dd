//! Report command implementation.
//!
//! The report command:
//! 1. Reads the trace file
//! 2. Parses it into messages
//! 3. Aggregates by member and function
//! 4. Prints the signal, method and service tables

use super::models::ReportArgs;
use super::utils::load_messages;
use crate::aggregator::MessageStats;
use crate::output::{build_report, render_report};
use anyhow::Result;
use log::{info, warn};
use std::time::Instant;

/// Rendered report text plus the number of chunks skipped to build it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub text: String,

    /// Always 0 unless `keep_going` was set
    pub skipped: usize,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file cannot be read
/// * A chunk matches no message shape (unless `keep_going` is set)
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    let report = generate_report(&args)?;
    println!("{}", report.text);

    if report.skipped > 0 {
        warn!("Skipped {} unparsable chunk(s)", report.skipped);
    }

    info!("Report completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

/// Build the rendered report without printing it
///
/// **Public** - used by execute_report and tests
pub fn generate_report(args: &ReportArgs) -> Result<RenderedReport> {
    info!("Step 1/2: Parsing trace {}...", args.trace_path.display());
    let (messages, skipped) = load_messages(&args.trace_path, args.keep_going)?;

    info!("Messages: {}", MessageStats::from_messages(&messages).summary());

    info!("Step 2/2: Building report tables...");
    let tables = build_report(&messages, &args.config);

    Ok(RenderedReport {
        text: render_report(&tables, args.config.format),
        skipped,
    })
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    let members = args
        .config
        .signal_members
        .iter()
        .chain(&args.config.method_members);
    for member in members {
        if member.trim().is_empty() {
            anyhow::bail!("Member filters cannot be empty");
        }
    }

    Ok(())
}
