//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while turning trace text into messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A chunk matched none of the known message shapes
    #[error("Cannot parse message #{index} (line {line}):\n{text}")]
    UnrecognizedMessageShape {
        /// Position of the chunk in the trace (0-based)
        index: usize,
        /// Line number of the chunk's first line (1-based)
        line: usize,
        /// Full chunk text
        text: String,
    },
}

impl ParseError {
    /// Text of the chunk that failed to parse
    pub fn chunk_text(&self) -> &str {
        match self {
            ParseError::UnrecognizedMessageShape { text, .. } => text,
        }
    }

    /// Position of the failing chunk in the trace
    pub fn chunk_index(&self) -> usize {
        match self {
            ParseError::UnrecognizedMessageShape { index, .. } => *index,
        }
    }
}

/// Errors that can occur while reading a trace file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read trace: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Not a regular file: {0}")]
    NotAFile(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("{path} is not a trace document: {source}")]
    InvalidDocument {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    
    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
