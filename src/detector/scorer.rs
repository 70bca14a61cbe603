//! Weighted scoring of a text sample against a rule table
//!
//! Every language is scored in full; there is no early exit, since the
//! resolver compares all candidates.

use serde::Serialize;

use super::compiled::{CompiledLanguage, RuleTable};
use crate::language::LanguageId;

/// One rule's contribution to a language score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule_id: &'static str,
    /// Matches counted (already capped at the rule's `max_hits`)
    pub matches: u32,
    pub points: u32,
}

/// Accumulated score of one language for one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageScore {
    pub id: LanguageId,
    pub priority: i32,
    pub min_score: u32,
    pub score: u32,
    /// Contributing rules, highest contribution first
    pub hits: Vec<RuleHit>,
}

impl LanguageScore {
    #[must_use]
    pub fn meets_threshold(&self) -> bool {
        self.score >= self.min_score
    }
}

/// Trim `text` and cut it to at most `max_chars` characters.
///
/// Returns `None` for empty or whitespace-only input.
#[must_use]
pub fn prepare_sample(text: &str, max_chars: usize) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Some(&trimmed[..byte_idx]),
        None => Some(trimmed),
    }
}

/// Score a prepared sample against one compiled language.
#[must_use]
pub fn score_language(language: &CompiledLanguage, sample: &str) -> LanguageScore {
    let counts = language.match_counts(sample);

    let mut hits: Vec<RuleHit> = language
        .rules()
        .iter()
        .zip(counts)
        .filter_map(|(compiled, matches)| {
            let points = compiled.rule.points(matches);
            (points > 0).then(|| RuleHit {
                rule_id: compiled.rule.id,
                matches,
                points,
            })
        })
        .collect();

    // Stable: equal contributions keep table order
    hits.sort_by(|a, b| b.points.cmp(&a.points));

    let score = hits
        .iter()
        .fold(0u32, |acc, hit| acc.saturating_add(hit.points));

    let def = language.definition;
    LanguageScore {
        id: def.id,
        priority: def.priority,
        min_score: def.min_score,
        score,
        hits,
    }
}

/// Score a prepared sample against every language in the table, in table order.
#[must_use]
pub fn score_all(table: &RuleTable, sample: &str) -> Vec<LanguageScore> {
    table
        .languages()
        .iter()
        .map(|language| score_language(language, sample))
        .collect()
}
