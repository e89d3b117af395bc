//! Property-based testing strategies and helpers
//!
//! This module provides shared proptest strategies for use across test files.

use proptest::prelude::*;
use proptest::test_runner::Config;

/// Standard proptest configuration for all property-based tests
pub fn proptest_config() -> Config {
    Config {
        cases: 512,
        max_shrink_iters: 10000,
        ..Config::default()
    }
}

/// Custom strategies for domain-specific types
pub mod strategies {
    use super::*;
    use crate::models::log_record::LogRecord;

    /// Event names (word characters only)
    pub fn event_name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_]{1,16}"
    }

    /// Timestamp contents, never containing brackets or field markers
    pub fn timestamp() -> impl Strategy<Value = String> {
        "[0-9T:. -]{0,25}"
    }

    /// Either a bare word or a percentage token
    pub fn status() -> impl Strategy<Value = String> {
        prop_oneof!["[A-Z]{2,8}", "[0-9]{1,3}".prop_map(|d| format!("{}%", d)),]
    }

    /// Error text: free-form, but free of field markers and brackets
    pub fn error_text() -> impl Strategy<Value = String> {
        "[a-z ]{1,30}"
    }

    /// Any line at all, including control characters and unicode
    pub fn arbitrary_line() -> impl Strategy<Value = String> {
        "\\PC{0,80}"
    }

    /// A well-formed log line together with the record it must parse to
    pub fn log_line() -> impl Strategy<Value = (String, LogRecord)> {
        (
            proptest::option::of(timestamp()),
            proptest::option::of(event_name()),
            proptest::option::of(any::<u64>()),
            proptest::option::of(status()),
            proptest::option::of(error_text()),
        )
            .prop_map(|(timestamp, event, latency_ms, status, error)| {
                let mut parts = Vec::new();
                if let Some(ts) = &timestamp {
                    parts.push(format!("[{}]", ts));
                }
                if let Some(ev) = &event {
                    parts.push(format!("EVENT: {}", ev));
                }
                if let Some(ms) = latency_ms {
                    parts.push(format!("LATENCY: {}ms", ms));
                }
                if let Some(st) = &status {
                    parts.push(format!("STATUS: {}", st));
                }
                // ERROR 必须放在最后，它会吞掉行尾
                if let Some(err) = &error {
                    parts.push(format!("ERROR: {}", err));
                }

                let record = LogRecord {
                    timestamp,
                    event,
                    latency_ms,
                    status,
                    error,
                };
                (parts.join(" "), record)
            })
    }

    /// A batch of well-formed log lines, possibly interleaved with blanks
    pub fn log_lines() -> impl Strategy<Value = Vec<(String, LogRecord)>> {
        prop::collection::vec(
            prop_oneof![
                4 => log_line(),
                1 => Just((String::new(), LogRecord::default())),
            ],
            0..50,
        )
    }
}
