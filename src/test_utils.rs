//! Test utilities for building HRM session text
//!
//! Fixtures are generated rather than stored so every test states the exact
//! header values and rows it depends on, with the CRLF line endings device
//! software writes.

#![cfg(any(test, feature = "benchmark"))]

/// Line terminator used by HRM files.
pub const CRLF: &str = "\r\n";

/// Builder for a complete HRM session text.
///
/// Starts from a valid `[Params]` section (version 1.06, 5 s interval,
/// mode `111000100`) and an empty `[HRData]` block.
#[derive(Debug, Clone)]
pub struct HrmFixture {
    params: Vec<(String, String)>,
    rows: Vec<String>,
}

impl Default for HrmFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl HrmFixture {
    pub fn new() -> Self {
        let params = [
            ("Version", "106"),
            ("Monitor", "12"),
            ("Mode", "111000100"),
            ("Date", "20240315"),
            ("StartTime", "07:45:12.0"),
            ("Length", "01:02:03"),
            ("Interval", "5"),
            ("Upper1", "0"),
            ("Lower1", "0"),
            ("MaxHR", "190"),
            ("RestHR", "48"),
            ("StartDelay", "0"),
            ("VO2max", "55"),
            ("Weight", "72"),
        ];

        Self {
            params: params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            rows: Vec::new(),
        }
    }

    /// Set a header parameter, replacing an existing one with the same label.
    pub fn param(mut self, label: &str, value: &str) -> Self {
        match self.params.iter_mut().find(|(k, _)| k == label) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.params.push((label.to_string(), value.to_string())),
        }
        self
    }

    /// Remove a header parameter.
    pub fn without(mut self, label: &str) -> Self {
        self.params.retain(|(k, _)| k != label);
        self
    }

    pub fn mode(self, code: &str) -> Self {
        self.param("Mode", code)
    }

    pub fn interval(self, seconds: &str) -> Self {
        self.param("Interval", seconds)
    }

    /// Append one `[HRData]` row; columns are joined with tabs.
    pub fn row(mut self, columns: &[&str]) -> Self {
        self.rows.push(columns.join("\t"));
        self
    }

    /// Append `count` identical rows.
    pub fn repeat_row(mut self, columns: &[&str], count: usize) -> Self {
        let row = columns.join("\t");
        self.rows.extend(std::iter::repeat_n(row, count));
        self
    }

    pub fn build(&self) -> String {
        let mut text = String::from("[Params]");
        text.push_str(CRLF);
        for (label, value) in &self.params {
            text.push_str(&format!("{}={}{}", label, value, CRLF));
        }
        text.push_str(CRLF);

        text.push_str("[Note]");
        text.push_str(CRLF);
        text.push_str("Morning ride");
        text.push_str(CRLF);
        text.push_str(CRLF);

        text.push_str("[HRData]");
        text.push_str(CRLF);
        for row in &self.rows {
            text.push_str(row);
            text.push_str(CRLF);
        }
        text.push_str(CRLF);
        text
    }
}
