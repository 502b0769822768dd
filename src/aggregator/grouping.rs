//! Member filtering and per-function summaries.
//!
//! A "function" is the literal first string parameter of a signal or
//! method call. Messages without one are never grouped.

use crate::parser::Message;
use log::debug;
use std::collections::BTreeMap;

/// One row of a function table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSummary {
    /// Function text, quotes included
    pub function: String,

    /// Number of messages carrying this function
    pub occurrences: usize,

    // Representative fields, taken from the first message of the group
    pub path: String,
    pub sender: String,
    pub dest: String,
}

/// Select messages whose member is one of `members`
///
/// **Public** - keeps input order
pub fn filter_by_member<'a, S: AsRef<str>>(
    messages: &'a [Message],
    members: &[S],
) -> Vec<&'a Message> {
    messages
        .iter()
        .filter(|m| {
            m.member()
                .is_some_and(|member| members.iter().any(|wanted| wanted.as_ref() == member))
        })
        .collect()
}

/// Group messages by function and count occurrences
///
/// **Public** - main entry point for function tables
///
/// # Returns
/// One summary per distinct function, sorted by function text
pub fn summarize_by_function<'a, I>(messages: I) -> Vec<FunctionSummary>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut groups: BTreeMap<&'a str, FunctionSummary> = BTreeMap::new();
    let mut ungrouped = 0usize;

    for message in messages {
        let Some(function) = message.function() else {
            ungrouped += 1;
            continue;
        };

        groups
            .entry(function)
            .and_modify(|summary| summary.occurrences += 1)
            .or_insert_with(|| FunctionSummary {
                function: function.to_string(),
                occurrences: 1,
                path: message.path().unwrap_or_default().to_string(),
                sender: message.sender().to_string(),
                dest: message.dest().to_string(),
            });
    }

    if ungrouped > 0 {
        debug!("{} messages had no function and were not grouped", ungrouped);
    }

    groups.into_values().collect()
}
