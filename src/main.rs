//! D-Bus Trace Report CLI
//!
//! Parses captured D-Bus monitor traces and prints function and service
//! tables, or writes the parsed messages as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use dbus_trace_report::commands::{
    display_schema, display_version, execute_parse, execute_report, validate_document_file,
    validate_parse_args, validate_report_args, ParseArgs, ReportArgs,
};
use dbus_trace_report::output::{ReportConfig, TableFormat};
use dbus_trace_report::utils::config::{DEFAULT_METHOD_MEMBERS, DEFAULT_SIGNAL_MEMBERS};

/// D-Bus Trace Report - message tables from monitor dumps
#[derive(Parser, Debug)]
#[command(name = "dbus-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print signal, method and service tables for a trace
    Report {
        /// Trace file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Table layout
        #[arg(long, value_enum, default_value_t = TableFormat::Delimited)]
        format: TableFormat,

        /// Member selecting the signal table (repeatable)
        #[arg(long = "signal-member", default_values_t = DEFAULT_SIGNAL_MEMBERS.iter().map(|s| s.to_string()))]
        signal_members: Vec<String>,

        /// Member selecting the method table (repeatable)
        #[arg(long = "method-member", default_values_t = DEFAULT_METHOD_MEMBERS.iter().map(|s| s.to_string()))]
        method_members: Vec<String>,

        /// Skip unparsable messages instead of failing
        #[arg(long)]
        keep_going: bool,
    },

    /// Parse a trace and write the messages as JSON
    Parse {
        /// Trace file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the JSON document
        #[arg(short, long, default_value = "messages.json")]
        output: PathBuf,

        /// Skip unparsable messages instead of failing
        #[arg(long)]
        keep_going: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a trace document JSON file
    Validate {
        /// Path to document JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            file,
            format,
            signal_members,
            method_members,
            keep_going,
        } => {
            let args = ReportArgs {
                trace_path: file,
                config: ReportConfig {
                    signal_members,
                    method_members,
                    format,
                },
                keep_going,
            };

            validate_report_args(&args)?;
            execute_report(args)?;
        }

        Commands::Parse {
            file,
            output,
            keep_going,
            summary,
        } => {
            let args = ParseArgs {
                trace_path: file,
                output_json: output,
                keep_going,
                print_summary: summary,
            };

            validate_parse_args(&args)?;
            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_document_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
