//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

use latticectl::core::config::Config;
use latticectl::etcd::{
    Event, EventType, KeyPermission, KeyValue, Permission, RangeResponse, ResponseHeader,
};
use latticectl::printer::{FormatterConfig, Printer, Response, SimplePrinter};
use std::io::Write;
use tempfile::NamedTempFile;

/// Output captured from one printer run.
#[derive(Debug, Default)]
pub struct Captured {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Captured {
    pub fn stdout_str(&self) -> &str {
        std::str::from_utf8(&self.stdout).expect("stdout is not UTF-8")
    }

    pub fn stderr_str(&self) -> &str {
        std::str::from_utf8(&self.stderr).expect("stderr is not UTF-8")
    }
}

/// Print `responses` in order through a fresh simple printer.
pub fn capture_all(config: FormatterConfig, responses: &[Response]) -> Captured {
    let mut printer = SimplePrinter::new(config, Vec::new(), Vec::new());
    for response in responses {
        printer.print(response).expect("printing into a Vec cannot fail");
    }
    let (stdout, stderr) = printer.into_parts();
    Captured { stdout, stderr }
}

/// Print a single response.
pub fn capture(config: FormatterConfig, response: &Response) -> Captured {
    capture_all(config, std::slice::from_ref(response))
}

/// Print a single response with default settings.
pub fn capture_default(response: &Response) -> Captured {
    capture(FormatterConfig::default(), response)
}

/// Create a configuration file with custom settings.
pub fn create_config_with_settings(
    format: &str,
    hex: bool,
    print_value_only: bool,
    log_level: &str,
) -> NamedTempFile {
    let config_content = format!(
        r#"
[output]
format = "{}"
hex = {}
print_value_only = {}

[telemetry]
log_level = "{}"
"#,
        format, hex, print_value_only, log_level
    );

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(config_content.as_bytes())
        .expect("Failed to write config");
    file
}

/// Load a config from a temp file.
pub fn load_config(file: &NamedTempFile) -> Config {
    Config::from_file(file.path()).expect("Failed to load config")
}

/// Header with a fixed cluster ID.
pub fn test_header() -> ResponseHeader {
    ResponseHeader {
        cluster_id: 0xcdf818194e3a8c32,
        member_id: 0x8e9e05c52164694d,
        revision: 42,
        raft_term: 3,
    }
}

/// Range response holding `pairs` in order.
pub fn range_of(pairs: &[(&str, &str)]) -> RangeResponse {
    RangeResponse {
        header: test_header(),
        kvs: pairs.iter().map(|(k, v)| KeyValue::new(*k, *v)).collect(),
        more: false,
        count: pairs.len() as i64,
    }
}

/// Watch event without a previous value.
pub fn event(event_type: EventType, key: &str, value: &str) -> Event {
    Event {
        event_type,
        kv: KeyValue::new(key, value),
        prev_kv: None,
    }
}

/// A role grant covering one of each permission shape.
pub fn mixed_permissions() -> Vec<KeyPermission> {
    vec![
        KeyPermission::exact("config", Permission::Read),
        KeyPermission::prefix("users/", Permission::ReadWrite),
        KeyPermission::range("a", "m", Permission::Write),
        KeyPermission::from_key("z", Permission::Read),
    ]
}

/// Assert that two byte slices are equal with a helpful message.
#[track_caller]
pub fn assert_bytes_eq(expected: &[u8], actual: &[u8]) {
    if expected != actual {
        panic!(
            "Byte slices not equal:\n  expected: {:?}\n  actual:   {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(actual)
        );
    }
}

/// Assert that a result is Err.
#[track_caller]
pub fn assert_err<T: std::fmt::Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
        Err(e) => e,
    }
}
