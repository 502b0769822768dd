//! Classifies a message chunk into one of the known message shapes.
//!
//! Shapes overlap textually (a method call with a string parameter also
//! matches the bare call shape), so they are tried in a fixed order and
//! the first match wins:
//!
//! 1. signal header + `string` parameter line
//! 2. method call header + `string` parameter line
//! 3. method return header
//! 4. method call header alone
//!
//! Each header field runs up to the first occurrence of the next field
//! label. The last header field runs to the end of its line. Captured text
//! is kept verbatim, trailing whitespace included.

use super::message::{Header, Invocation, Message, Reply};
use super::segmenter::MessageChunk;
use crate::utils::error::ParseError;
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

macro_rules! header_pattern {
    ($keyword:literal, $tail:literal) => {
        concat!(
            r"\A",
            $keyword,
            r" sender=(?P<sender>.+?) -> dest=(?P<dest>.+?) serial=(?P<serial>.*?)",
            r" path=(?P<path>.*?) interface=(?P<interface>.*?) member=(?P<member>.*)",
            $tail
        )
    };
}

// The parameter line is the first non-blank text after the header.
static SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(header_pattern!("signal", r"\n\s+string (?P<function>.*)"))
        .expect("valid signal pattern")
});

static METHOD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(header_pattern!("method call", r"\n\s+string (?P<function>.*)"))
        .expect("valid method call pattern")
});

static METHOD_RETURN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\Amethod return sender=(?P<sender>.+?) -> dest=(?P<dest>.+?) reply_serial=(?P<reply_serial>.*)")
        .expect("valid method return pattern")
});

static BARE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(header_pattern!("method call", "")).expect("valid bare call pattern")
});

/// A recognizable message shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Signal,
    MethodCall,
    MethodReturn,
    BareCall,
}

impl Shape {
    /// Match order; earlier shapes win
    const PRECEDENCE: [Shape; 4] = [
        Shape::Signal,
        Shape::MethodCall,
        Shape::MethodReturn,
        Shape::BareCall,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Shape::Signal => &*SIGNAL,
            Shape::MethodCall => &*METHOD_CALL,
            Shape::MethodReturn => &*METHOD_RETURN,
            Shape::BareCall => &*BARE_CALL,
        }
    }

    /// Build the record for this shape from a successful match
    fn extract(self, caps: &Captures<'_>) -> Message {
        match self {
            Shape::Signal => Message::Signal(invocation(caps)),
            Shape::MethodCall => Message::MethodCall(invocation(caps)),
            Shape::MethodReturn => Message::MethodReturn(Reply {
                sender: field(caps, "sender"),
                dest: field(caps, "dest"),
                reply_serial: field(caps, "reply_serial"),
            }),
            Shape::BareCall => Message::BareCall(header(caps)),
        }
    }
}

/// Classify one chunk
///
/// **Public** - second stage of the parse pipeline
///
/// # Errors
/// * `ParseError::UnrecognizedMessageShape` - chunk matches no known shape;
///   carries the chunk's index, line and full text
pub fn classify(chunk: &MessageChunk) -> Result<Message, ParseError> {
    for shape in Shape::PRECEDENCE {
        if let Some(caps) = shape.pattern().captures(&chunk.text) {
            debug!("Chunk #{} matched {:?}", chunk.index, shape);
            return Ok(shape.extract(&caps));
        }
    }

    Err(ParseError::UnrecognizedMessageShape {
        index: chunk.index,
        line: chunk.line,
        text: chunk.text.clone(),
    })
}

fn invocation(caps: &Captures<'_>) -> Invocation {
    Invocation {
        header: header(caps),
        function: field(caps, "function"),
    }
}

fn header(caps: &Captures<'_>) -> Header {
    Header {
        sender: field(caps, "sender"),
        dest: field(caps, "dest"),
        serial: field(caps, "serial"),
        path: field(caps, "path"),
        interface: field(caps, "interface"),
        member: field(caps, "member"),
    }
}

fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
