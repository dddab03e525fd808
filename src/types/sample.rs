//! Per-row measurements from the `[HRData]` block

use serde::{Deserialize, Serialize};

use super::FeatureFlags;

/// One measurement instant.
///
/// Optional channels are `Some` exactly when the session's [`FeatureFlags`]
/// declare them; a `Some(NaN)` marks a declared value that did not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Sample {
    /// Heart rate in beats per minute.
    #[serde(rename = "hr")]
    pub heart_rate: f64,
    /// Speed in km/h, or 0.1 km/h when the regional unit flag is set.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub speed: Option<f64>,
    #[serde(rename = "cad", skip_serializing_if = "Option::is_none", default)]
    pub cadence: Option<f64>,
    #[serde(rename = "alt", skip_serializing_if = "Option::is_none", default)]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pressure: Option<f64>,

    /// Seconds since the session start (`row index * interval`).
    #[serde(rename = "timeFromStart")]
    pub time_from_start: f64,
    /// Running distance in metres, rounded to 2 decimals.
    #[serde(rename = "distanceFromStart", skip_serializing_if = "Option::is_none", default)]
    pub distance_from_start: Option<f64>,
    /// Distance covered during this sample's interval in metres, rounded to 2 decimals.
    #[serde(rename = "distanceInterval", skip_serializing_if = "Option::is_none", default)]
    pub distance_interval: Option<f64>,
}

impl Sample {
    /// Create a sample carrying only a heart rate.
    pub fn new(heart_rate: f64) -> Self {
        Self { heart_rate, ..Self::default() }
    }

    /// Number of optional channels present on this sample.
    pub fn channel_count(&self) -> usize {
        [self.speed, self.cadence, self.altitude, self.power, self.pressure]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }

    /// Whether the present channels are exactly those declared by `flags`.
    pub fn matches_features(&self, flags: &FeatureFlags) -> bool {
        self.speed.is_some() == flags.speed
            && self.cadence.is_some() == flags.cadence
            && self.altitude.is_some() == flags.altitude
            && self.power.is_some() == flags.power
            && self.pressure.is_some() == flags.pressure
    }
}
