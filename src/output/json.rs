//! Trace documents on disk.
//!
//! A document is written as pretty-printed JSON followed by a newline.
//! Missing parent directories are created.

use crate::parser::schema::TraceDocument;
use crate::utils::error::OutputError;
use log::debug;
use std::fs;
use std::path::Path;

/// Write a trace document as JSON
///
/// **Public** - used by the parse command
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::WriteFailed` - the file could not be written
pub fn write_document(
    document: &TraceDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let path = output_path.as_ref();
    prepare_output_path(path)?;

    let mut json = document_to_string(document)?;
    json.push('\n');
    fs::write(path, json)?;

    debug!("Wrote {} messages to {}", document.message_count, path.display());
    Ok(())
}

/// Serialize a document to a pretty JSON string
pub fn document_to_string(document: &TraceDocument) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Load a trace document from a JSON file
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `OutputError::ReadFailed` - the file could not be read
/// * `OutputError::InvalidDocument` - the contents are not a trace document
pub fn read_document(input_path: impl AsRef<Path>) -> Result<TraceDocument, OutputError> {
    let path = input_path.as_ref();
    let shown = || path.display().to_string();

    let text = fs::read_to_string(path)
        .map_err(|source| OutputError::ReadFailed { path: shown(), source })?;
    let document: TraceDocument = serde_json::from_str(&text)
        .map_err(|source| OutputError::InvalidDocument { path: shown(), source })?;

    debug!("Loaded {} messages from {}", document.messages.len(), path.display());
    Ok(document)
}

/// Reject unusable output paths and create missing parent directories
///
/// **Private** - internal helper for write_document
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create {}: {}", parent.display(), e))
            })
        }
        _ => Ok(()),
    }
}
