//! Winner selection, threshold rejection and confidence normalisation

use super::result::DetectionResult;
use super::scorer::LanguageScore;
use crate::config::DetectorConfig;

/// Reason attached when no rule of any language matched
pub const REASON_NO_MATCH: &str = "no patterns matched";

/// Order candidates by score, then priority, both descending.
///
/// The sort is stable, so full ties keep table order.
pub fn rank(scores: &mut [LanguageScore]) {
    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.priority.cmp(&a.priority))
    });
}

/// `score / (min_score * scale)` clamped to `[0, 1]`
///
/// A zero `min_score` is treated as 1 so the ratio stays finite.
#[must_use]
pub fn confidence(score: u32, min_score: u32, scale: f64) -> f64 {
    let denominator = f64::from(min_score.max(1)) * scale;
    (f64::from(score) / denominator).clamp(0.0, 1.0)
}

/// Turn the per-language scores into a single result.
///
/// Never fails: an empty candidate list or a winner below its own threshold
/// degrades to the plain-text fallback.
#[must_use]
pub fn resolve(mut scores: Vec<LanguageScore>, config: &DetectorConfig) -> DetectionResult {
    rank(&mut scores);

    let Some(best) = scores.into_iter().next() else {
        return DetectionResult::fallback(config.fallback_confidence(), REASON_NO_MATCH, 0);
    };

    if best.score == 0 {
        return DetectionResult::fallback(config.fallback_confidence(), REASON_NO_MATCH, 0);
    }

    if !best.meets_threshold() {
        return DetectionResult::fallback(
            config.fallback_confidence(),
            format!(
                "below threshold: {} scored {} of {}",
                best.id, best.score, best.min_score
            ),
            best.score,
        );
    }

    let reasons = best
        .hits
        .iter()
        .take(config.max_reasons())
        .map(|hit| format!("{} (+{})", hit.rule_id, hit.points))
        .collect();

    DetectionResult {
        lang: best.id,
        confidence: confidence(best.score, best.min_score, config.confidence_scale()),
        reasons,
        score: best.score,
    }
}
