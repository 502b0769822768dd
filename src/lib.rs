//! D-Bus Trace Report
//!
//! Turns a captured D-Bus monitor text dump into typed message records
//! and aggregates them into per-function and per-service tables.
//!
//! The core is a two-stage parser:
//! - [`parser::segment`] splits the raw text into one chunk per message
//! - [`parser::classify`] matches each chunk against the known shapes
//!
//! ```ignore
//! let messages = dbus_trace_report::parser::parse_messages(&text)?;
//! ```
//!
//! This crate also provides the `dbus-trace` CLI tool.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
