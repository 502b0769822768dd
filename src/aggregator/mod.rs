//! Aggregation of parsed messages for reporting.
//!
//! This module turns the message sequence into:
//! - Member-filtered, per-function summaries
//! - Occurrence counts per object path
//! - Per-kind statistics

pub mod grouping;
pub mod metrics;
pub mod services;

// Re-export main types and functions
pub use grouping::{filter_by_member, summarize_by_function, FunctionSummary};
pub use metrics::MessageStats;
pub use services::{count_by_path, ServiceCount};
