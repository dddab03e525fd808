//! Elapsed time and distance derivation
//!
//! Runs once, after every sample exists. Distance is integrated left to
//! right from speed and the fixed sampling interval; each stored value is the
//! running value rounded to centimetres at that step, so the stored figures
//! carry the same rounding as files converted by earlier tools.

use crate::Sample;
use tracing::debug;

/// km/h to m/s divisor.
const KMH_PER_MS: f64 = 3.6;
/// Regional unit speeds are stored in 0.1 km/h.
const REGIONAL_SPEED_SCALE: f64 = 10.0;

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a stored speed to metres per second.
pub fn speed_to_ms(speed: f64, regional_units: bool) -> f64 {
    let kmh = if regional_units { speed / REGIONAL_SPEED_SCALE } else { speed };
    kmh / KMH_PER_MS
}

/// Fill in elapsed time and distance fields, returning the total distance
/// formatted with two decimals.
///
/// `time_from_start` is set on every sample. Distance fields are set only on
/// samples carrying a speed; the others are left `None` and add nothing to
/// the total.
pub fn derive_distances(samples: &mut [Sample], interval: f64, regional_units: bool) -> String {
    let mut total = 0.0;

    for (index, sample) in samples.iter_mut().enumerate() {
        sample.time_from_start = index as f64 * interval;

        if let Some(speed) = sample.speed {
            let step = interval * speed_to_ms(speed, regional_units);
            total += step;

            sample.distance_interval = Some(round2(step));
            sample.distance_from_start = Some(round2(total));
        }
    }

    let distance = format!("{:.2}", round2(total));
    debug!(samples = samples.len(), interval, regional_units, %distance, "Derived distances");
    distance
}
