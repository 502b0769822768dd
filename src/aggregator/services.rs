//! Occurrence counts per object path.

use crate::parser::Message;
use std::collections::BTreeMap;

/// One row of the services table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCount {
    pub path: String,
    pub occurrences: usize,
}

/// Count messages per `path`, sorted by path
///
/// Messages without a path (method returns) are not counted.
pub fn count_by_path<'a, I>(messages: I) -> Vec<ServiceCount>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut counts: BTreeMap<&'a str, usize> = BTreeMap::new();
    for path in messages.into_iter().filter_map(Message::path) {
        *counts.entry(path).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(path, occurrences)| ServiceCount {
            path: path.to_string(),
            occurrences,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Header, Reply};
    use pretty_assertions::assert_eq;

    fn bare(path: &str) -> Message {
        Message::BareCall(Header {
            sender: "s".to_string(),
            dest: "d".to_string(),
            serial: "1".to_string(),
            path: path.to_string(),
            interface: "i".to_string(),
            member: "Hello".to_string(),
        })
    }

    #[test]
    fn test_count_by_path() {
        let messages = vec![
            bare("/b"),
            bare("/a"),
            bare("/b"),
            Message::MethodReturn(Reply {
                sender: "s".to_string(),
                dest: "d".to_string(),
                reply_serial: "1".to_string(),
            }),
        ];

        assert_eq!(
            count_by_path(&messages),
            vec![
                ServiceCount { path: "/a".to_string(), occurrences: 1 },
                ServiceCount { path: "/b".to_string(), occurrences: 2 },
            ]
        );
    }
}
