//! Session assembly
//!
//! [`HrmParser`] runs the pipeline in a fixed order and returns either a
//! complete [`SessionRecord`] or the first error; no partial record escapes.
//!
//! ```text
//! text ──► params ──► mode ──► length/start ──► [HRData] ──► distances ──► SessionRecord
//! ```

use super::distance::derive_distances;
use super::numeric::parse_float;
use super::params::{MODE_LABELS, get_param, get_param_any};
use super::samples::parse_samples;
use super::temporal::{parse_duration, parse_instant};
use crate::{FeatureFlags, HrmError, ParseOptions, Result, SessionRecord};
use tracing::{debug, warn};

/// Parser for HRM session text.
///
/// Holds only its options, so one parser can be shared freely between calls
/// and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HrmParser {
    options: ParseOptions,
}

impl HrmParser {
    /// Create a parser with the default (lenient) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a complete HRM text into a session record.
    pub fn parse(&self, text: &str) -> Result<SessionRecord> {
        let version = get_param(text, "Version")?;
        let interval_raw = get_param(text, "Interval")?;
        let max_hr = optional_scalar(text, "MaxHR")?;
        let rest_hr = optional_scalar(text, "RestHR")?;
        let vo2_max = optional_scalar(text, "VO2max")?;
        let weight = optional_scalar(text, "Weight")?;
        let mode = get_param_any(text, &MODE_LABELS)?;
        let length = get_param(text, "Length")?;
        let date = get_param(text, "Date")?;
        let start_time = get_param(text, "StartTime")?;

        let interval = parse_float(interval_raw);
        if !interval.is_finite() || interval < 0.0 {
            return Err(HrmError::malformed_numeric("Interval", interval_raw));
        }

        let (mode_layout, features) = FeatureFlags::decode(mode);

        let duration_ms = parse_duration(length);
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(HrmError::malformed_numeric("Length", length));
        }

        let date_time = parse_instant(date, start_time).ok_or_else(|| {
            HrmError::malformed_numeric("Date/StartTime", format!("{} {}", date, start_time))
        })?;

        debug!(version, interval, duration_ms, %date_time, "Parsed session header");

        let mut samples = parse_samples(text, &features, self.options.sample_policy)?;
        let distance = derive_distances(&mut samples, interval, features.regional_units);

        debug!(samples = samples.len(), %distance, "Assembled session record");

        Ok(SessionRecord {
            version: version.to_string(),
            features,
            mode_layout,
            date_time,
            duration_ms,
            distance,
            interval,
            max_hr,
            rest_hr,
            vo2_max,
            weight,
            samples,
        })
    }
}

/// Required label whose value may be non-numeric; NaN is kept and logged.
fn optional_scalar(text: &str, label: &str) -> Result<f64> {
    let raw = get_param(text, label)?;
    let value = parse_float(raw);
    if value.is_nan() {
        warn!(label, raw, "Header value is not numeric, keeping NaN");
    }
    Ok(value)
}
