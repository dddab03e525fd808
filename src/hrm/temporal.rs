//! Start time and session length parsing
//!
//! `Date` (`YYYYMMDD`) and `StartTime` (`HH:MM:SS[.f]`) are read as a UTC
//! wall clock: the host time zone never takes part, so identical input gives
//! an identical instant on every machine.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

use super::numeric::parse_float;

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_SECOND: f64 = 1000.0;

/// Split `H:MM:SS` into three lenient floats; absent parts are NaN.
fn clock_parts(text: &str) -> (f64, f64, f64) {
    let mut parts = text.split(':').map(parse_float);
    let mut next = || parts.next().unwrap_or(f64::NAN);
    (next(), next(), next())
}

/// Parse a `H:MM:SS` length into milliseconds.
///
/// Components are floats, so fractional seconds are kept. Malformed input
/// yields NaN rather than an error; callers decide whether that is fatal.
pub fn parse_duration(text: &str) -> f64 {
    let (h, m, s) = clock_parts(text);
    h * MS_PER_HOUR + m * MS_PER_MINUTE + s * MS_PER_SECOND
}

/// Parse a date and start time into a UTC instant with millisecond precision.
///
/// Returns `None` when the date is not a valid `YYYYMMDD` calendar day or a
/// time component is not numeric. Clock values past `23:59:59` roll over into
/// the following day.
pub fn parse_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let year: i32 = date.get(0..4)?.parse().ok()?;
    let month: u32 = date.get(4..6)?.parse().ok()?;
    let day: u32 = date.get(6..8)?.parse().ok()?;
    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;

    let offset_ms = parse_duration(time);
    if !offset_ms.is_finite() {
        return None;
    }

    let offset = TimeDelta::try_milliseconds(offset_ms.round() as i64)?;
    Utc.from_utc_datetime(&midnight).checked_add_signed(offset)
}
