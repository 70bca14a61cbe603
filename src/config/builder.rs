//! Validating builder for `DetectorConfig`
//!
//! Every setter is optional; `build()` checks the assembled values so a
//! detector can never be constructed with a confidence formula that exceeds
//! the `[0, 1]` range or a sample window of zero characters.

use anyhow::{anyhow, bail, Result};

use super::types::DetectorConfig;

/// Reject NaN and values outside `[0, 1]`
fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        bail!("{name} must be within [0, 1], got {value}");
    }
    Ok(())
}

fn validate(config: &DetectorConfig) -> Result<()> {
    if config.max_sample_chars == 0 {
        bail!("max_sample_chars must be greater than 0");
    }
    if !config.confidence_scale.is_finite() || config.confidence_scale <= 1.0 {
        bail!(
            "confidence_scale must be a finite value greater than 1, got {}",
            config.confidence_scale
        );
    }
    check_unit_interval("fallback_confidence", config.fallback_confidence)?;
    check_unit_interval("code_confidence_threshold", config.code_confidence_threshold)?;
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct DetectorConfigBuilder {
    pub(crate) max_sample_chars: Option<usize>,
    pub(crate) confidence_scale: Option<f64>,
    pub(crate) fallback_confidence: Option<f64>,
    pub(crate) max_reasons: Option<usize>,
    pub(crate) code_confidence_threshold: Option<f64>,
}

impl DetectorConfig {
    /// Create a builder starting from the default calibration
    #[must_use]
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }

    /// Parse a (possibly partial) JSON object; missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DetectorConfig =
            serde_json::from_str(json).map_err(|e| anyhow!("Invalid detector config JSON: {e}"))?;
        validate(&config)?;
        Ok(config)
    }
}

impl DetectorConfigBuilder {
    #[must_use]
    pub fn max_sample_chars(mut self, chars: usize) -> Self {
        self.max_sample_chars = Some(chars);
        self
    }

    #[must_use]
    pub fn confidence_scale(mut self, scale: f64) -> Self {
        self.confidence_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn fallback_confidence(mut self, confidence: f64) -> Self {
        self.fallback_confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn max_reasons(mut self, reasons: usize) -> Self {
        self.max_reasons = Some(reasons);
        self
    }

    #[must_use]
    pub fn code_confidence_threshold(mut self, threshold: f64) -> Self {
        self.code_confidence_threshold = Some(threshold);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_sample_chars` is zero, `confidence_scale` is
    /// not greater than 1, or a confidence value lies outside `[0, 1]`.
    pub fn build(self) -> Result<DetectorConfig> {
        let defaults = DetectorConfig::default();
        let config = DetectorConfig {
            max_sample_chars: self.max_sample_chars.unwrap_or(defaults.max_sample_chars),
            confidence_scale: self.confidence_scale.unwrap_or(defaults.confidence_scale),
            fallback_confidence: self
                .fallback_confidence
                .unwrap_or(defaults.fallback_confidence),
            max_reasons: self.max_reasons.unwrap_or(defaults.max_reasons),
            code_confidence_threshold: self
                .code_confidence_threshold
                .unwrap_or(defaults.code_confidence_threshold),
        };
        validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_matches_default() {
        let config = DetectorConfig::builder().build().unwrap();
        assert_eq!(config, DetectorConfig::default());
    }

    #[test]
    fn scale_must_exceed_one() {
        assert!(DetectorConfig::builder().confidence_scale(1.0).build().is_err());
        assert!(DetectorConfig::builder().confidence_scale(f64::NAN).build().is_err());
        assert!(DetectorConfig::builder().confidence_scale(3.0).build().is_ok());
    }

    #[test]
    fn confidences_stay_in_unit_interval() {
        assert!(DetectorConfig::builder().fallback_confidence(1.5).build().is_err());
        assert!(DetectorConfig::builder().code_confidence_threshold(-0.1).build().is_err());
    }
}
