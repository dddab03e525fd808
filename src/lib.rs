//! Type-safe Rust parser for heart-rate-monitor (HRM) training sessions.
//!
//! HRM files hold a session header (device mode, start time, length,
//! physiological limits) and a table of fixed-interval samples: heart rate
//! plus, depending on the device mode, speed, cadence, altitude, power and
//! air pressure. This crate turns one complete file text into a
//! [`SessionRecord`] and derives elapsed time and distance for every sample.
//!
//! # Features
//!
//! - **Typed channels**: optional channels are `Option<f64>`, absent unless the mode code declares them
//! - **Versioned mode decoding**: legacy 3-character and current 8/9-character codes, with a visible fallback
//! - **Deterministic time**: start instants are read as UTC, independent of the host zone
//! - **Legacy JSON**: records serialize with the key names used by earlier JSON converters
//!
//! ## Example
//!
//! ```rust
//! let text = "[Params]\r\nVersion=106\r\nMode=100000000\r\nDate=20240315\r\n\
//!             StartTime=07:45:12.0\r\nLength=00:00:15\r\nInterval=5\r\nMaxHR=190\r\n\
//!             RestHR=48\r\nVO2max=55\r\nWeight=72\r\n\r\n\
//!             [HRData]\r\n120\t360\r\n125\t360\r\n128\t0\r\n\r\n";
//!
//! let session = hrm_session::parse(text)?;
//! assert_eq!(session.len(), 3);
//! assert_eq!(session.distance, "100.00");
//! assert_eq!(session.samples[2].time_from_start, 10.0);
//! # Ok::<(), hrm_session::HrmError>(())
//! ```

// Core types and error handling
mod error;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Format parsing
pub mod hrm;

// Core exports
pub use error::*;
pub use types::*;

// Main API exports
pub use hrm::HrmParser;

use std::path::Path;

/// Parse a complete HRM text with the default (lenient) options.
///
/// # Errors
///
/// Returns an error if:
/// - A required `[Params]` label is missing ([`HrmError::MissingField`])
/// - `Interval`, `Length`, `Date` or `StartTime` is not numeric ([`HrmError::MalformedNumeric`])
pub fn parse(text: &str) -> Result<SessionRecord> {
    HrmParser::new().parse(text)
}

/// Read and parse an HRM file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// device software often writes notes in a legacy code page.
///
/// # Errors
///
/// Returns [`HrmError::File`] if the file cannot be read, otherwise the
/// errors of [`parse`].
pub fn open<P: AsRef<Path>>(path: P) -> Result<SessionRecord> {
    open_with(path, ParseOptions::default())
}

/// Read and parse an HRM file with explicit options.
pub fn open_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<SessionRecord> {
    let bytes = std::fs::read(&path)
        .map_err(|e| HrmError::file_error(path.as_ref().to_path_buf(), e))?;
    let text = String::from_utf8_lossy(&bytes);

    tracing::debug!(path = %path.as_ref().display(), bytes = bytes.len(), "Read HRM file");
    HrmParser::with_options(options).parse(&text)
}

impl std::str::FromStr for SessionRecord {
    type Err = HrmError;

    fn from_str(text: &str) -> Result<Self> {
        parse(text)
    }
}
