//! Typed message records produced by the classifier.
//!
//! All field values are the literal text captured from the trace. Numeric
//! conversion of serials is left to callers (see [`Message::serial_number`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Header fields shared by signals and method calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub sender: String,
    pub dest: String,
    pub serial: String,
    pub path: String,
    pub interface: String,
    pub member: String,
}

/// A signal or method call header followed by its first string parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(flatten)]
    pub header: Header,

    /// Literal quoted text of the first string parameter
    pub function: String,
}

/// Fields of a method return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub sender: String,
    pub dest: String,
    pub reply_serial: String,
}

/// One parsed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Signal(Invocation),
    MethodCall(Invocation),
    MethodReturn(Reply),
    /// Method call header with no string parameter line
    BareCall(Header),
}

/// Discriminant of [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    Signal,
    MethodCall,
    MethodReturn,
    BareCall,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageKind::Signal => "signal",
            MessageKind::MethodCall => "method call",
            MessageKind::MethodReturn => "method return",
            MessageKind::BareCall => "bare call",
        };
        f.write_str(name)
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Signal(_) => MessageKind::Signal,
            Message::MethodCall(_) => MessageKind::MethodCall,
            Message::MethodReturn(_) => MessageKind::MethodReturn,
            Message::BareCall(_) => MessageKind::BareCall,
        }
    }

    /// Header fields, if this message kind has them
    pub fn header(&self) -> Option<&Header> {
        match self {
            Message::Signal(inv) | Message::MethodCall(inv) => Some(&inv.header),
            Message::BareCall(header) => Some(header),
            Message::MethodReturn(_) => None,
        }
    }

    pub fn sender(&self) -> &str {
        match self {
            Message::MethodReturn(reply) => &reply.sender,
            Message::Signal(inv) | Message::MethodCall(inv) => &inv.header.sender,
            Message::BareCall(header) => &header.sender,
        }
    }

    pub fn dest(&self) -> &str {
        match self {
            Message::MethodReturn(reply) => &reply.dest,
            Message::Signal(inv) | Message::MethodCall(inv) => &inv.header.dest,
            Message::BareCall(header) => &header.dest,
        }
    }

    pub fn serial(&self) -> Option<&str> {
        self.header().map(|h| h.serial.as_str())
    }

    pub fn reply_serial(&self) -> Option<&str> {
        match self {
            Message::MethodReturn(reply) => Some(&reply.reply_serial),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.header().map(|h| h.path.as_str())
    }

    pub fn interface(&self) -> Option<&str> {
        self.header().map(|h| h.interface.as_str())
    }

    pub fn member(&self) -> Option<&str> {
        self.header().map(|h| h.member.as_str())
    }

    /// First string parameter, verbatim (quotes included)
    pub fn function(&self) -> Option<&str> {
        match self {
            Message::Signal(inv) | Message::MethodCall(inv) => Some(&inv.function),
            _ => None,
        }
    }

    /// Serial as an integer, when the token is numeric
    pub fn serial_number(&self) -> Option<u64> {
        self.serial().and_then(|s| s.trim().parse().ok())
    }

    /// Reply serial as an integer, when the token is numeric
    pub fn reply_serial_number(&self) -> Option<u64> {
        self.reply_serial().and_then(|s| s.trim().parse().ok())
    }
}
