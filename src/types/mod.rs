//! Core types for HRM session data.
//!
//! ## Architecture
//!
//! The type system mirrors the sections of an HRM file:
//! - [`FeatureFlags`] is decoded from the `Mode` parameter and decides which
//!   `[HRData]` columns are read; [`ModeLayout`] records how it was decoded
//! - [`Sample`] is one `[HRData]` row plus its derived time and distance
//! - [`SessionRecord`] bundles the `[Params]` metadata with the samples
//! - [`ParseOptions`] and [`SamplePolicy`] configure the parser
//!
//! ## Usage Example
//!
//! ```rust
//! use hrm_session::types::{FeatureFlags, ModeLayout};
//!
//! let (layout, flags) = FeatureFlags::decode("10010001");
//! assert_eq!(layout, ModeLayout::Current);
//! assert!(flags.speed && flags.power);
//! assert!(!flags.regional_units);
//! ```

mod features;
mod options;
mod sample;
mod session;

// Re-export all public types
pub use features::{FeatureFlags, ModeLayout};
pub use options::{ParseOptions, SamplePolicy};
pub use sample::Sample;
pub use session::SessionRecord;

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decode_never_panics_on_arbitrary_codes(code in ".{0,16}") {
            let (layout, flags) = FeatureFlags::decode(&code);
            prop_assert_eq!(layout, ModeLayout::detect(&code));
            prop_assert!(flags.sample_channel_count() <= 5);
        }

        #[test]
        fn prop_layout_selected_by_length(code in "[01]{0,12}") {
            let layout = ModeLayout::detect(&code);
            match code.len() {
                3 => prop_assert_eq!(layout, ModeLayout::Legacy),
                8 | 9 => prop_assert_eq!(layout, ModeLayout::Current),
                length => prop_assert_eq!(layout, ModeLayout::Fallback { length }),
            }
        }

        #[test]
        fn prop_legacy_layout_never_reports_speed_power_or_pressure(code in "[0-9]{3}") {
            let flags = FeatureFlags::from_mode(&code);
            prop_assert!(!flags.speed);
            prop_assert!(!flags.power);
            prop_assert!(!flags.pressure);
            prop_assert!(!(flags.cadence && flags.altitude));
        }

        #[test]
        fn prop_current_layout_reads_positions(code in "[01]{9}") {
            let flags = FeatureFlags::from_mode(&code);
            let bytes = code.as_bytes();
            prop_assert_eq!(flags.speed, bytes[0] == b'1');
            prop_assert_eq!(flags.cadence, bytes[1] == b'1');
            prop_assert_eq!(flags.altitude, bytes[2] == b'1');
            prop_assert_eq!(flags.power, bytes[3] == b'1');
            prop_assert_eq!(flags.regional_units, bytes[7] == b'0');
            prop_assert_eq!(flags.pressure, bytes[8] == b'1');
        }
    }

    #[test]
    fn legacy_mode_altitude_variant() {
        let (layout, flags) = FeatureFlags::decode("101");
        assert_eq!(layout, ModeLayout::Legacy);
        assert!(flags.altitude);
        assert!(!flags.cadence);
        assert!(!flags.regional_units);
    }

    #[test]
    fn legacy_mode_cadence_variant_with_regional_units() {
        let flags = FeatureFlags::from_mode("000");
        assert!(flags.cadence);
        assert!(!flags.altitude);
        assert!(flags.regional_units);
    }

    #[test]
    fn current_mode_eight_characters() {
        let (layout, flags) = FeatureFlags::decode("10010001");
        assert_eq!(layout, ModeLayout::Current);
        assert_eq!(
            flags,
            FeatureFlags {
                speed: true,
                cadence: false,
                altitude: false,
                power: true,
                regional_units: false,
                pressure: false,
            }
        );
    }

    #[test]
    fn current_mode_nine_characters_reads_pressure() {
        let flags = FeatureFlags::from_mode("111110001");
        assert!(flags.speed && flags.cadence && flags.altitude && flags.power);
        assert!(flags.pressure);
        assert!(!flags.regional_units);
        assert_eq!(flags.sample_channel_count(), 5);
    }

    #[test]
    fn unknown_length_falls_back_to_current_layout() {
        let (layout, flags) = FeatureFlags::decode("1101");
        assert_eq!(layout, ModeLayout::Fallback { length: 4 });
        assert!(layout.is_degraded());
        assert!(flags.speed && flags.cadence && flags.power);
        assert!(!flags.altitude);
        // position 7 is absent, so it never reads as '0'
        assert!(!flags.regional_units);
    }

    #[test]
    fn empty_mode_code_sets_nothing() {
        let (layout, flags) = FeatureFlags::decode("");
        assert_eq!(layout, ModeLayout::Fallback { length: 0 });
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn sample_feature_matching() {
        let flags = FeatureFlags { speed: true, altitude: true, ..FeatureFlags::default() };
        let mut sample = Sample::new(120.0);
        assert!(!sample.matches_features(&flags));

        sample.speed = Some(25.0);
        sample.altitude = Some(f64::NAN);
        assert!(sample.matches_features(&flags));
        assert_eq!(sample.channel_count(), flags.sample_channel_count());

        sample.power = Some(200.0);
        assert!(!sample.matches_features(&flags));
    }

    #[test]
    fn parse_options_default_is_lenient() {
        assert_eq!(ParseOptions::default().sample_policy, SamplePolicy::Lenient);
        assert!(ParseOptions::strict().sample_policy.is_strict());
        assert_eq!(
            ParseOptions::strict().with_sample_policy(SamplePolicy::Lenient),
            ParseOptions::default()
        );
    }
}
