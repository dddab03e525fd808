//! Assembled session record

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FeatureFlags, ModeLayout, Sample};
use crate::{HrmError, Result};

/// A fully assembled training session.
///
/// Built once per parse and never mutated afterwards. Serializes with the
/// key names used by the legacy JSON converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Raw `Version` parameter, e.g. `"106"`.
    pub version: String,
    pub features: FeatureFlags,
    /// Layout used to decode the mode code.
    pub mode_layout: ModeLayout,
    /// Session start, read as a UTC wall clock.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[cfg_attr(feature = "tauri", specta(type = i64))]
    pub date_time: DateTime<Utc>,
    /// Session length in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: f64,
    /// Total distance in metres, formatted with two decimals.
    pub distance: String,
    /// Sampling interval in seconds.
    pub interval: f64,
    #[serde(rename = "hrMax")]
    pub max_hr: f64,
    #[serde(rename = "hrRest")]
    pub rest_hr: f64,
    #[serde(rename = "vo2max")]
    pub vo2_max: f64,
    pub weight: f64,
    #[serde(rename = "hrmData")]
    pub samples: Vec<Sample>,
}

impl SessionRecord {
    /// Session length.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_ms / 1000.0).unwrap_or(Duration::ZERO)
    }

    /// Spacing between consecutive samples.
    pub fn sample_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.interval).unwrap_or(Duration::ZERO)
    }

    /// Total distance in metres; NaN when a speed value did not parse.
    pub fn total_distance_m(&self) -> f64 {
        self.distance.parse().unwrap_or(f64::NAN)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the `[HRData]` block had no rows.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Render as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| HrmError::Parse {
            context: "SessionRecord serialization".to_string(),
            details: e.to_string(),
        })
    }

    /// Render as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HrmError::Parse {
            context: "SessionRecord serialization".to_string(),
            details: e.to_string(),
        })
    }
}
