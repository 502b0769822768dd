use dbus_trace_report::aggregator::{
    count_by_path, filter_by_member, summarize_by_function, MessageStats, ServiceCount,
};
use dbus_trace_report::output::{build_report, render_report, ReportConfig, TableFormat};
use dbus_trace_report::parser::parse_messages;
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/monitor.log");

#[test]
fn test_signal_summaries() {
    let messages = parse_messages(FIXTURE).unwrap();
    let emits = filter_by_member(&messages, &["Emit"]);
    let summaries = summarize_by_function(emits);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].function, "\"routeChanged\"");
    assert_eq!(summaries[0].occurrences, 2);
    assert_eq!(summaries[0].path, "/com/example/Navigation");
    assert_eq!(summaries[1].function, "\"trackChanged\"");
    assert_eq!(summaries[1].occurrences, 1);
}

#[test]
fn test_method_summaries() {
    let messages = parse_messages(FIXTURE).unwrap();
    let calls = filter_by_member(&messages, &["Invoke", "AddMatch"]);
    let summaries = summarize_by_function(calls);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].function, "\"favAllowed\"");
    assert_eq!(summaries[0].occurrences, 2);
    assert_eq!(summaries[0].sender, ":1.26");
    assert_eq!(summaries[0].dest, "com.example.service.Tagger");
}

#[test]
fn test_services_include_bare_calls() {
    let messages = parse_messages(FIXTURE).unwrap();

    assert_eq!(
        count_by_path(&messages),
        vec![
            ServiceCount {
                path: "/com/example/Media".to_string(),
                occurrences: 1,
            },
            ServiceCount {
                path: "/com/example/Navigation".to_string(),
                occurrences: 2,
            },
            ServiceCount {
                path: "/com/example/service/Tagger".to_string(),
                occurrences: 2,
            },
            ServiceCount {
                path: "/org/freedesktop/DBus".to_string(),
                occurrences: 2,
            },
        ]
    );
}

#[test]
fn test_message_stats() {
    let messages = parse_messages(FIXTURE).unwrap();
    let stats = MessageStats::from_messages(&messages);

    assert_eq!(stats.total, 9);
    assert_eq!(stats.signals, 3);
    assert_eq!(stats.method_calls, 3);
    assert_eq!(stats.bare_calls, 1);
    assert_eq!(stats.method_returns, 2);
    assert_eq!(stats.distinct_functions, 4);
}

#[test]
fn test_pretty_report() {
    let messages = parse_messages(FIXTURE).unwrap();
    let tables = build_report(&messages, &ReportConfig::default());
    let report = render_report(&tables, TableFormat::Pretty);

    let expected = "\
Signals: (Member=Emit)   Occurences   Path
\"routeChanged\"         | 2          | /com/example/Navigation
\"trackChanged\"         | 1          | /com/example/Media

Methods: (Member=Invoke)                             Occurrence   Sender   Destination
\"favAllowed\"                                       | 2          | :1.26  | com.example.service.Tagger
\"type='signal',interface='com.example.ServiceIpc'\" | 1          | :1.26  | org.freedesktop.DBus

Services                      Occurrence
/com/example/Media          | 1
/com/example/Navigation     | 2
/com/example/service/Tagger | 2
/org/freedesktop/DBus       | 2";

    assert_eq!(report, expected);
}
