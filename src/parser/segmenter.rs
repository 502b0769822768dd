//! Splits raw trace text into per-message chunks.
//!
//! A chunk starts at a boundary line (a line beginning with one of
//! [`BOUNDARY_TOKENS`] once its timestamp prefix is removed) and runs up to
//! the next boundary line or the end of input. Text before the first
//! boundary is preamble and is dropped.

use crate::utils::config::BOUNDARY_TOKENS;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// One or more leading "[...] " tokens. Bracket contents may not hold a
// backslash; each token ends at the first "] ".
static TIMESTAMP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[[^\\\n]*?\] )+").expect("valid timestamp pattern"));

/// Text of a single message occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageChunk {
    /// Position among the chunks of the trace (0-based)
    pub index: usize,

    /// Line number of the boundary line (1-based)
    pub line: usize,

    /// Boundary line plus its continuation lines, timestamps stripped
    pub text: String,
}

impl MessageChunk {
    /// Wrap free-standing text as the first chunk of a trace
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            index: 0,
            line: 1,
            text: text.into(),
        }
    }
}

/// Remove the leading bracketed timestamp token(s) from one line
///
/// Lines without a timestamp are returned unchanged.
pub fn strip_timestamp(line: &str) -> &str {
    match TIMESTAMP_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Check whether a (stripped) line opens a new message
pub fn is_boundary(line: &str) -> bool {
    BOUNDARY_TOKENS.iter().any(|token| line.starts_with(token))
}

/// Split a raw trace into message chunks, in encounter order
///
/// **Public** - first stage of the parse pipeline
///
/// Never fails: a trace with no boundary lines yields no chunks.
pub fn segment(raw: &str) -> Vec<MessageChunk> {
    let mut chunks = Vec::new();
    let mut current: Option<MessageChunk> = None;
    let mut preamble_lines = 0usize;

    for (offset, line) in raw.split_inclusive('\n').enumerate() {
        let line = strip_timestamp(line);

        if is_boundary(line) {
            if let Some(chunk) = current.take() {
                push_chunk(&mut chunks, chunk);
            }
            current = Some(MessageChunk {
                index: 0,
                line: offset + 1,
                text: line.to_string(),
            });
        } else if let Some(chunk) = current.as_mut() {
            chunk.text.push_str(line);
        } else {
            preamble_lines += 1;
        }
    }

    if let Some(chunk) = current {
        push_chunk(&mut chunks, chunk);
    }

    if preamble_lines > 0 {
        debug!("Discarded {} preamble line(s) before first message", preamble_lines);
    }
    debug!("Segmented trace into {} chunks", chunks.len());

    chunks
}

/// Append a chunk, numbering it and dropping blank ones
///
/// **Private** - internal helper for segment
fn push_chunk(chunks: &mut Vec<MessageChunk>, mut chunk: MessageChunk) {
    if chunk.text.trim().is_empty() {
        return;
    }
    chunk.index = chunks.len();
    chunks.push(chunk);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_timestamp() {
        assert_eq!(
            strip_timestamp("[Wed Dec  2 13:08:37 2015] signal sender=:1.35"),
            "signal sender=:1.35"
        );
        assert_eq!(strip_timestamp("signal sender=:1.35"), "signal sender=:1.35");
        // Needs the trailing space
        assert_eq!(strip_timestamp("[12:00]signal"), "[12:00]signal");
    }

    #[test]
    fn test_strip_timestamp_leaves_later_brackets() {
        assert_eq!(
            strip_timestamp("[t] method call sender=[x] y"),
            "method call sender=[x] y"
        );
    }

    #[test]
    fn test_strip_timestamp_allows_inner_bracket() {
        assert_eq!(strip_timestamp("[t]2] signal sender=A"), "signal sender=A");
        assert_eq!(strip_timestamp("[t]2] [u] string \"x\""), "string \"x\"");
    }

    #[test]
    fn test_segment_timestamp_with_inner_bracket() {
        let raw = "[t1] method return sender=B -> dest=A reply_serial=1\n\
                   [t]2] signal sender=A -> dest=B serial=5 path=/x interface=I member=Emit\n\
                   [t]2]    string \"foo\"\n";
        let chunks = segment(raw);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "method return sender=B -> dest=A reply_serial=1\n");
        assert_eq!(
            chunks[1].text,
            "signal sender=A -> dest=B serial=5 path=/x interface=I member=Emit\n   string \"foo\"\n"
        );
        assert_eq!(chunks[1].line, 2);
    }

    #[test]
    fn test_strip_timestamp_rejects_backslash() {
        let line = "[a\\b] signal sender=x";
        assert_eq!(strip_timestamp(line), line);
    }

    #[test]
    fn test_strip_timestamp_idempotent() {
        for line in [
            "[t1] [t2] signal sender=a",
            "[t] method return sender=a",
            "plain text",
            "",
            "[] x",
        ] {
            let once = strip_timestamp(line);
            assert_eq!(strip_timestamp(once), once);
        }
    }

    #[test]
    fn test_is_boundary() {
        assert!(is_boundary("signal sender=:1.2 -> dest=x"));
        assert!(is_boundary("method call sender=:1.2"));
        assert!(is_boundary("method return sender=:1.2"));
        assert!(!is_boundary("   signal sender=:1.2"));
        assert!(!is_boundary("   string \"method call sender\""));
        assert!(!is_boundary("error sender=:1.2"));
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("").is_empty());
        assert!(segment("just some log noise\nmore noise\n").is_empty());
    }

    #[test]
    fn test_segment_drops_preamble() {
        let raw = "Wed Dec  2 13:08:37 2015\n\
                   signal sender=a -> dest=b serial=1 path=/p interface=i member=Emit\n\
                   \x20  string \"foo\"\n";
        let chunks = segment(raw);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].line, 2);
        assert!(chunks[0].text.starts_with("signal sender=a"));
        assert!(!chunks[0].text.contains("2015"));
        assert!(chunks[0].text.contains("string \"foo\""));
    }

    #[test]
    fn test_segment_strips_timestamps_and_splits() {
        let raw = "[10:00:01] signal sender=a -> dest=b serial=1 path=/p interface=i member=Emit\n\
                   [10:00:01]    string \"foo\"\n\
                   [10:00:02] method return sender=b -> dest=a reply_serial=1\n";
        let chunks = segment(raw);

        assert_eq!(chunks.len(), 2);
        assert_eq!(
            chunks[0].text,
            "signal sender=a -> dest=b serial=1 path=/p interface=i member=Emit\n   string \"foo\"\n"
        );
        assert_eq!(chunks[1].text, "method return sender=b -> dest=a reply_serial=1\n");
        assert_eq!(chunks[1].index, 1);
        assert_eq!(chunks[1].line, 3);
    }

    #[test]
    fn test_segment_keeps_repeats() {
        let line = "method return sender=b -> dest=a reply_serial=1\n";
        let raw = line.repeat(3);
        let chunks = segment(&raw);

        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.text == line));
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_segment_chunk_count_matches_boundaries() {
        let raw = "noise\n\
                   method call sender=a -> dest=b serial=1 path=/p interface=i member=Invoke\n\
                   \x20  string \"x\"\n\
                   \x20  signal sender=indented, not a boundary\n\
                   noise signal sender=mid-line, not a boundary\n\
                   signal sender=a -> dest=b serial=2 path=/p interface=i member=Emit\n\
                   \x20  string \"y\"\n\
                   method return sender=b -> dest=a reply_serial=1";
        let boundaries = raw
            .lines()
            .map(strip_timestamp)
            .filter(|l| is_boundary(l))
            .count();

        let chunks = segment(raw);
        assert_eq!(chunks.len(), boundaries);
        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].text.contains("signal sender=indented"));
        assert!(chunks[0].text.contains("noise signal sender=mid-line"));
        // Last chunk has no trailing newline
        assert_eq!(chunks[2].text, "method return sender=b -> dest=a reply_serial=1");
    }
}
