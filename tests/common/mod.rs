//! Shared helpers for integration tests.

#![allow(dead_code)]

/// Build an HRM session text with CRLF line endings.
///
/// `params` override or extend the default header; rows are tab separated.
pub fn session_text(params: &[(&str, &str)], rows: &[&[&str]]) -> String {
    let mut header: Vec<(String, String)> = [
        ("Version", "106"),
        ("Monitor", "12"),
        ("Mode", "100000000"),
        ("Date", "20240315"),
        ("StartTime", "07:45:12.0"),
        ("Length", "00:00:15"),
        ("Interval", "5"),
        ("MaxHR", "190"),
        ("RestHR", "48"),
        ("VO2max", "55"),
        ("Weight", "72"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (label, value) in params {
        match header.iter_mut().find(|(k, _)| k == label) {
            Some(entry) => entry.1 = value.to_string(),
            None => header.push((label.to_string(), value.to_string())),
        }
    }

    let mut text = String::from("[Params]\r\n");
    for (label, value) in &header {
        text.push_str(&format!("{}={}\r\n", label, value));
    }
    text.push_str("\r\n[HRData]\r\n");
    for row in rows {
        text.push_str(&row.join("\t"));
        text.push_str("\r\n");
    }
    text.push_str("\r\n");
    text
}

/// Remove one header line from a session text.
pub fn without_param(text: &str, label: &str) -> String {
    let prefix = format!("{}=", label);
    text.split("\r\n")
        .filter(|line| !line.starts_with(&prefix))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Route library logs to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
