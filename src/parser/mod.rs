//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Splitting raw monitor text into message chunks
//! - Classifying chunks into typed messages
//! - Defining the output schema

pub mod classifier;
pub mod message;
pub mod schema;
pub mod segmenter;
pub mod trace;

// Re-export main types
pub use classifier::classify;
pub use message::{Header, Invocation, Message, MessageKind, Reply};
pub use schema::TraceDocument;
pub use segmenter::{is_boundary, segment, strip_timestamp, MessageChunk};
pub use trace::{parse_messages, parse_messages_lenient, ParseOutcome};
