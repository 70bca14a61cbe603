//! Core configuration type for language detection
//!
//! `DetectorConfig` holds the calibration knobs of the scorer and resolver.
//! It is plain data, cheap to clone, and can be loaded from JSON supplied by
//! the host editor.

use serde::{Deserialize, Serialize};

/// Characters of (trimmed) input considered by the scorer
pub const DEFAULT_MAX_SAMPLE_CHARS: usize = 20_000;

/// Multiple of a language's `min_score` at which confidence saturates
pub const DEFAULT_CONFIDENCE_SCALE: f64 = 2.2;

/// Confidence reported with the plain-text fallback
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.2;

/// Contributing rules listed in `DetectionResult::reasons`
pub const DEFAULT_MAX_REASONS: usize = 8;

/// Confidence an `is_code` check must exceed
pub const DEFAULT_CODE_CONFIDENCE_THRESHOLD: f64 = 0.2;

/// Calibration of the scorer and resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub(crate) max_sample_chars: usize,

    /// Confidence is `score / (min_score * confidence_scale)`, clamped to 1.
    ///
    /// Must be greater than 1 so a score exactly at the threshold yields
    /// moderate confidence rather than certainty.
    pub(crate) confidence_scale: f64,

    pub(crate) fallback_confidence: f64,
    pub(crate) max_reasons: usize,
    pub(crate) code_confidence_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_sample_chars: DEFAULT_MAX_SAMPLE_CHARS,
            confidence_scale: DEFAULT_CONFIDENCE_SCALE,
            fallback_confidence: DEFAULT_FALLBACK_CONFIDENCE,
            max_reasons: DEFAULT_MAX_REASONS,
            code_confidence_threshold: DEFAULT_CODE_CONFIDENCE_THRESHOLD,
        }
    }
}
