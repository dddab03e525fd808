//! Parser configuration

use serde::{Deserialize, Serialize};

/// How the sample table parser treats rows that do not fully parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum SamplePolicy {
    /// Keep the row; missing or non-numeric values become NaN.
    #[default]
    Lenient,

    /// Reject the whole parse on the first row with a missing or non-numeric
    /// heart rate or declared channel.
    Strict,
}

impl SamplePolicy {
    /// Check if rows must be fully numeric
    pub fn is_strict(self) -> bool {
        matches!(self, SamplePolicy::Strict)
    }
}

/// Options for [`HrmParser`](crate::HrmParser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ParseOptions {
    pub sample_policy: SamplePolicy,
}

impl ParseOptions {
    /// Options with the strict sample policy.
    pub fn strict() -> Self {
        Self { sample_policy: SamplePolicy::Strict }
    }

    /// Replace the sample policy.
    pub fn with_sample_policy(mut self, sample_policy: SamplePolicy) -> Self {
        self.sample_policy = sample_policy;
        self
    }
}
