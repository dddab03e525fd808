//! `Label=value` parameter extraction from the header area
//!
//! Only lines in front of the `[HRData]` section are searched, and the whole
//! key before `=` must equal the label, so `Mode` never matches the `SMode`
//! line by accident. Version 1.06 files name the mode code `SMode`; callers
//! that accept both spellings use [`get_param_any`].

use super::samples::DATA_SECTION;
use crate::{HrmError, Result};
use tracing::trace;

/// Required header labels, in the order the assembler reads them.
pub const REQUIRED_PARAMS: [&str; 10] = [
    "Version",
    "Interval",
    "MaxHR",
    "RestHR",
    "VO2max",
    "Weight",
    "Mode",
    "Length",
    "Date",
    "StartTime",
];

/// The part of the text that holds `Label=value` lines.
pub fn header_area(text: &str) -> &str {
    match text.find(DATA_SECTION) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Labels accepted for the mode code, oldest spelling first.
pub const MODE_LABELS: [&str; 2] = ["Mode", "SMode"];

/// Return the raw value of `label`, without its line terminator.
pub fn get_param<'a>(text: &'a str, label: &str) -> Result<&'a str> {
    get_param_any(text, &[label])
}

/// Return the value of the first label in `labels` that the header defines.
///
/// Labels are tried in order, so an earlier label wins regardless of where
/// the lines sit in the file. A missing value is reported under the first
/// label.
pub fn get_param_any<'a>(text: &'a str, labels: &[&str]) -> Result<&'a str> {
    let header = header_area(text);
    let (key, value) = labels
        .iter()
        .find_map(|label| {
            header
                .lines()
                .filter_map(|line| line.split_once('='))
                .find(|(key, _)| key == label)
        })
        .ok_or_else(|| HrmError::missing_field(labels.first().copied().unwrap_or_default()))?;

    trace!(label = key, value, "Extracted header parameter");
    Ok(value)
}
