//! Output JSON schema for parsed traces.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use super::message::Message;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level document structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the messages were parsed from
    pub source: String,

    /// Number of messages in `messages`
    pub message_count: usize,

    /// Parsed messages, in trace order
    pub messages: Vec<Message>,

    /// Timestamp when the document was generated
    pub generated_at: String,
}

impl TraceDocument {
    /// Build a document stamped with the current schema version and time
    pub fn new(source: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            message_count: messages.len(),
            messages,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
