//! Summary statistics over a parsed trace.

use crate::parser::{Message, MessageKind};
use std::collections::BTreeSet;

/// Message counts by kind
///
/// **Public** - returned from MessageStats::from_messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStats {
    /// Total number of messages
    pub total: usize,
    
    pub signals: usize,
    pub method_calls: usize,
    pub method_returns: usize,
    
    /// Method calls without a string parameter
    pub bare_calls: usize,
    
    /// Number of distinct function values
    pub distinct_functions: usize,
}

impl MessageStats {
    /// Count messages per kind
    ///
    /// **Public** - main entry point for statistics
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut stats = Self {
            total: messages.len(),
            ..Self::default()
        };
        let mut functions = BTreeSet::new();
        
        for message in messages {
            match message.kind() {
                MessageKind::Signal => stats.signals += 1,
                MessageKind::MethodCall => stats.method_calls += 1,
                MessageKind::MethodReturn => stats.method_returns += 1,
                MessageKind::BareCall => stats.bare_calls += 1,
            }
            if let Some(function) = message.function() {
                functions.insert(function);
            }
        }
        
        stats.distinct_functions = functions.len();
        stats
    }
    
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Signals: {} | Method calls: {} | Returns: {} | Bare calls: {} | Functions: {}",
            self.total,
            self.signals,
            self.method_calls,
            self.method_returns,
            self.bare_calls,
            self.distinct_functions
        )
    }
}
