//! `[HRData]` sample table parsing
//!
//! ## Row Layout
//!
//! Each row is a tab separated list of numbers. Column positions are fixed;
//! whether a column is read depends on the session's [`FeatureFlags`]:
//!
//! | Column | Channel   | Read when          |
//! |--------|-----------|--------------------|
//! | 0      | heart rate| always             |
//! | 1      | speed     | `speed`            |
//! | 2      | cadence   | `cadence`          |
//! | 3      | altitude  | `altitude`         |
//! | 4      | power     | `power`            |
//! | 5      | reserved  | never              |
//! | 6      | pressure  | `pressure`         |
//!
//! The block starts on the line after `[HRData]` and ends at the first empty
//! line or the end of the text.

use crate::{FeatureFlags, HrmError, Result, Sample, SamplePolicy};
use tracing::{debug, trace, warn};

use super::numeric::parse_float;

/// Section header that opens the sample table.
pub const DATA_SECTION: &str = "[HRData]";

const HEART_RATE_COLUMN: usize = 0;
const SPEED_COLUMN: usize = 1;
const CADENCE_COLUMN: usize = 2;
const ALTITUDE_COLUMN: usize = 3;
const POWER_COLUMN: usize = 4;
const PRESSURE_COLUMN: usize = 6;

/// Rows of the `[HRData]` block, or `None` when the section is absent.
pub fn data_rows(text: &str) -> Option<impl Iterator<Item = &str>> {
    let start = text.find(DATA_SECTION)? + DATA_SECTION.len();
    let mut lines = text[start..].lines();
    // rest of the section header line
    lines.next();
    Some(lines.take_while(|line| !line.is_empty()))
}

/// One row split into columns, with the policy used to read them.
struct RowReader<'a> {
    index: usize,
    columns: Vec<&'a str>,
    policy: SamplePolicy,
}

impl<'a> RowReader<'a> {
    fn new(index: usize, row: &'a str, policy: SamplePolicy) -> Self {
        Self { index, columns: row.split('\t').collect(), policy }
    }

    fn read(&self, column: usize, name: &str) -> Result<f64> {
        let value = self.columns.get(column).map_or(f64::NAN, |field| parse_float(field));
        if value.is_nan() && self.policy.is_strict() {
            return Err(HrmError::Parse {
                context: format!("{} row {}", DATA_SECTION, self.index),
                details: match self.columns.get(column) {
                    Some(field) => format!("{} column {} is not numeric: {:?}", name, column, field),
                    None => format!(
                        "{} column {} missing, row has {} columns",
                        name,
                        column,
                        self.columns.len()
                    ),
                },
            });
        }
        Ok(value)
    }

    fn channel(&self, enabled: bool, column: usize, name: &str) -> Result<Option<f64>> {
        if enabled { self.read(column, name).map(Some) } else { Ok(None) }
    }

    fn sample(&self, features: &FeatureFlags) -> Result<Sample> {
        Ok(Sample {
            heart_rate: self.read(HEART_RATE_COLUMN, "heart rate")?,
            speed: self.channel(features.speed, SPEED_COLUMN, "speed")?,
            cadence: self.channel(features.cadence, CADENCE_COLUMN, "cadence")?,
            altitude: self.channel(features.altitude, ALTITUDE_COLUMN, "altitude")?,
            power: self.channel(features.power, POWER_COLUMN, "power")?,
            pressure: self.channel(features.pressure, PRESSURE_COLUMN, "pressure")?,
            ..Sample::default()
        })
    }
}

fn has_nan(sample: &Sample) -> bool {
    sample.heart_rate.is_nan()
        || [sample.speed, sample.cadence, sample.altitude, sample.power, sample.pressure]
            .iter()
            .flatten()
            .any(|v| v.is_nan())
}

/// Parse the `[HRData]` block into samples in file order.
///
/// Only the channels enabled in `features` are read. A missing section or an
/// empty block yields no samples.
pub fn parse_samples(
    text: &str,
    features: &FeatureFlags,
    policy: SamplePolicy,
) -> Result<Vec<Sample>> {
    let Some(rows) = data_rows(text) else {
        warn!("No {} section found, session has no samples", DATA_SECTION);
        return Ok(Vec::new());
    };

    let mut samples = Vec::new();
    let mut nan_rows = 0usize;

    for (index, row) in rows.enumerate() {
        let sample = RowReader::new(index, row, policy).sample(features)?;
        if has_nan(&sample) {
            nan_rows += 1;
        }
        trace!(index, ?sample, "Parsed sample row");
        samples.push(sample);
    }

    if nan_rows > 0 {
        warn!(rows = nan_rows, "Sample rows with missing or non-numeric values kept as NaN");
    }
    debug!(count = samples.len(), "Parsed {} block", DATA_SECTION);

    Ok(samples)
}
