//! Parse pipeline: raw trace text to ordered message records.
//!
//! Two policies are offered. [`parse_messages`] stops at the first chunk
//! that matches no known shape. [`parse_messages_lenient`] logs and skips
//! such chunks so the rest of a degraded trace can still be reported.

use super::classifier::classify;
use super::message::Message;
use super::segmenter::segment;
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Result of a best-effort parse
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Recognized messages, in input order
    pub messages: Vec<Message>,

    /// One error per skipped chunk, in input order
    pub skipped: Vec<ParseError>,
}

impl ParseOutcome {
    /// True when no chunk had to be skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse a raw trace, failing on the first unrecognized chunk
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Full trace text
///
/// # Returns
/// All messages in input order; empty for a trace with no message headers
///
/// # Errors
/// * `ParseError::UnrecognizedMessageShape` - first chunk matching no shape
pub fn parse_messages(raw: &str) -> Result<Vec<Message>, ParseError> {
    let messages = segment(raw)
        .iter()
        .map(classify)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} messages", messages.len());
    Ok(messages)
}

/// Parse a raw trace, skipping unrecognized chunks
///
/// **Public** - best-effort entry point for degraded traces
pub fn parse_messages_lenient(raw: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for chunk in segment(raw) {
        match classify(&chunk) {
            Ok(message) => outcome.messages.push(message),
            Err(e) => {
                warn!(
                    "Skipping unparsable chunk #{} at line {}: {:?}",
                    chunk.index,
                    chunk.line,
                    chunk.text.lines().next().unwrap_or_default()
                );
                outcome.skipped.push(e);
            }
        }
    }

    debug!(
        "Parsed {} messages, skipped {} chunks",
        outcome.messages.len(),
        outcome.skipped.len()
    );
    outcome
}
