//! Getter methods for `DetectorConfig`

use super::types::DetectorConfig;

impl DetectorConfig {
    #[must_use]
    pub fn max_sample_chars(&self) -> usize {
        self.max_sample_chars
    }

    #[must_use]
    pub fn confidence_scale(&self) -> f64 {
        self.confidence_scale
    }

    #[must_use]
    pub fn fallback_confidence(&self) -> f64 {
        self.fallback_confidence
    }

    #[must_use]
    pub fn max_reasons(&self) -> usize {
        self.max_reasons
    }

    #[must_use]
    pub fn code_confidence_threshold(&self) -> f64 {
        self.code_confidence_threshold
    }
}
