//! `LanguageDetector`: a rule table plus calibration

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::compiled::RuleTable;
use super::result::DetectionResult;
use super::resolver::resolve;
use super::scorer::{prepare_sample, score_all, LanguageScore};
use crate::config::DetectorConfig;

/// Reason attached to the result for empty or whitespace-only input
pub const REASON_EMPTY_INPUT: &str = "empty input";

static DEFAULT_DETECTOR: Lazy<LanguageDetector> = Lazy::new(LanguageDetector::default);

/// Synchronous, side-effect-free language detector
///
/// Cheap to clone; the compiled table is shared behind an `Arc`, so any
/// number of detectors (with different calibrations or tables) can coexist.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    table: Arc<RuleTable>,
    config: DetectorConfig,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(RuleTable::builtin(), DetectorConfig::default())
    }
}

impl LanguageDetector {
    #[must_use]
    pub fn new(table: Arc<RuleTable>, config: DetectorConfig) -> Self {
        Self { table, config }
    }

    /// Built-in table with a custom calibration
    #[must_use]
    pub fn with_config(config: DetectorConfig) -> Self {
        Self::new(RuleTable::builtin(), config)
    }

    #[must_use]
    pub fn table(&self) -> &Arc<RuleTable> {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Classify `text`. Always returns a result.
    #[must_use]
    pub fn detect(&self, text: &str) -> DetectionResult {
        let Some(sample) = prepare_sample(text, self.config.max_sample_chars()) else {
            return DetectionResult::fallback(0.0, REASON_EMPTY_INPUT, 0);
        };

        let result = resolve(score_all(&self.table, sample), &self.config);
        tracing::trace!(
            lang = %result.lang,
            score = result.score,
            confidence = result.confidence,
            sample_chars = sample.len(),
            "Detected language"
        );
        result
    }

    /// True when `text` classifies as a real language with confidence above
    /// the configured code threshold.
    #[must_use]
    pub fn is_code(&self, text: &str) -> bool {
        self.detect(text)
            .is_code_above(self.config.code_confidence_threshold())
    }

    /// Per-language scores for `text`, ranked best first (diagnostics).
    #[must_use]
    pub fn scores(&self, text: &str) -> Vec<LanguageScore> {
        let Some(sample) = prepare_sample(text, self.config.max_sample_chars()) else {
            return Vec::new();
        };
        let mut scores = score_all(&self.table, sample);
        super::resolver::rank(&mut scores);
        scores
    }
}

/// Shared detector over the built-in table and default calibration
#[must_use]
pub fn default_detector() -> &'static LanguageDetector {
    &DEFAULT_DETECTOR
}

/// Classify `text` with the built-in rule table.
#[must_use]
pub fn detect_language(text: &str) -> DetectionResult {
    DEFAULT_DETECTOR.detect(text)
}

/// True iff `text` is detected as code with confidence above 0.2.
#[must_use]
pub fn is_code(text: &str) -> bool {
    DEFAULT_DETECTOR.is_code(text)
}
