//! Detection output contract

use serde::{Deserialize, Serialize};

use crate::language::LanguageId;

/// Outcome of one detection call
///
/// `confidence` is a per-call heuristic in `[0, 1]`, not a probability;
/// longer inputs accumulate more matches, so values are not comparable across
/// inputs of very different length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub lang: LanguageId,
    pub confidence: f64,
    /// Top contributing rules as `"<rule id> (+<points>)"`, or a fallback note
    pub reasons: Vec<String>,
    /// Raw accumulated score of the best candidate
    pub score: u32,
}

impl DetectionResult {
    /// Plain-text result with the given confidence and diagnostic note
    #[must_use]
    pub fn fallback(confidence: f64, reason: impl Into<String>, score: u32) -> Self {
        Self {
            lang: LanguageId::FALLBACK,
            confidence,
            reasons: vec![reason.into()],
            score,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.lang.is_fallback()
    }

    /// True when a real language was found with confidence above `threshold`
    #[must_use]
    pub fn is_code_above(&self, threshold: f64) -> bool {
        !self.is_fallback() && self.confidence > threshold
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.lang.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lang_as_identifier() {
        let result = DetectionResult {
            lang: LanguageId::DockerCompose,
            confidence: 0.5,
            reasons: vec!["dc.services (+14)".to_string()],
            score: 27,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["lang"], "docker-compose");
        assert_eq!(value["score"], 27);

        let back: DetectionResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn fallback_is_never_code() {
        let result = DetectionResult::fallback(0.9, "below threshold", 3);
        assert!(result.is_fallback());
        assert!(!result.is_code_above(0.2));
        assert_eq!(result.display_name(), "Plain Text");
    }
}
