//! Error types for HRM session parsing.
//!
//! Parsing is a pure, deterministic transform, so nothing here is retryable:
//! a session either assembles completely or fails with one of these kinds.
//!
//! ## Error Categories
//!
//! - **Missing Fields**: a required `[Params]` label is absent
//! - **Malformed Numerics**: a session-level scalar that must be numeric is not
//! - **Parse Errors**: a sample row rejected under [`SamplePolicy::Strict`](crate::SamplePolicy)
//! - **File Errors**: the session file could not be read
//!
//! Per-sample numeric problems are *not* errors under the default lenient
//! policy; they surface as NaN inside the affected optional field.
//!
//! ```rust
//! use hrm_session::HrmError;
//!
//! let error = HrmError::missing_field("MaxHR");
//! assert!(error.to_string().contains("MaxHR"));
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for HRM operations.
pub type Result<T, E = HrmError> = std::result::Result<T, E>;

/// Main error type for HRM parsing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HrmError {
    #[error("Required parameter '{field}' not found in session header")]
    MissingField { field: String },

    #[error("Parameter '{field}' is not numeric: {value:?}")]
    MalformedNumeric { field: String, value: String },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("HRM file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HrmError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            HrmError::MissingField { .. } => vec![
                "Check the file contains a [Params] section",
                "Verify the label spelling and case (labels are case-sensitive)",
                "Re-export the session from the device software",
            ],
            HrmError::MalformedNumeric { .. } => vec![
                "Check Interval is a number of seconds",
                "Check Length uses the H:MM:SS form",
                "Check Date is YYYYMMDD and StartTime is HH:MM:SS",
            ],
            HrmError::Parse { .. } => vec![
                "Check the [HRData] rows are tab separated",
                "Verify the Mode code matches the recorded columns",
                "Use the lenient sample policy to accept partial rows",
            ],
            HrmError::File { .. } => vec![
                "Check file exists and is readable",
                "Check file permissions",
            ],
        }
    }

    /// Helper constructor for missing header parameters.
    pub fn missing_field(field: impl Into<String>) -> Self {
        HrmError::MissingField { field: field.into() }
    }

    /// Helper constructor for session-level scalars that failed to parse.
    pub fn malformed_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        HrmError::MalformedNumeric { field: field.into(), value: value.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        HrmError::File { path, source }
    }
}
