//! Static rule descriptors for weighted language scoring
//!
//! A [`LanguageDefinition`] is plain data: an identifier, the aliases users
//! type for it, a tie-break priority, the minimum score it needs before it can
//! be reported, and the weighted [`Rule`]s that feed its score. Definitions
//! are declared as `static` items and compiled once into a
//! [`RuleTable`](super::compiled::RuleTable).

use crate::language::LanguageId;

/// One weighted pattern contributing to a language's score.
///
/// Regex flags travel inline with the pattern (`(?m)`, `(?i)`, `(?s)`), so a
/// rule is fully described by this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Stable identifier, reported in detection reasons (e.g. `df.from`)
    pub id: &'static str,
    pub pattern: &'static str,
    /// Points added per counted match
    pub weight: u32,
    /// Upper bound on counted matches, `None` counts every match
    pub max_hits: Option<u32>,
    pub note: Option<&'static str>,
}

impl Rule {
    pub const fn new(id: &'static str, pattern: &'static str, weight: u32) -> Self {
        Self {
            id,
            pattern,
            weight,
            max_hits: None,
            note: None,
        }
    }

    /// Limit how many matches of this rule count toward the score.
    #[must_use]
    pub const fn capped(self, max_hits: u32) -> Self {
        Self {
            max_hits: Some(max_hits),
            ..self
        }
    }

    #[must_use]
    pub const fn note(self, note: &'static str) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }

    /// Points this rule contributes for `matches` raw matches.
    #[must_use]
    pub fn points(&self, matches: u32) -> u32 {
        let counted = match self.max_hits {
            Some(cap) => matches.min(cap),
            None => matches,
        };
        counted.saturating_mul(self.weight)
    }

    /// Largest contribution this rule can make, `None` when uncapped.
    #[must_use]
    pub fn max_points(&self) -> Option<u32> {
        self.max_hits.map(|cap| cap.saturating_mul(self.weight))
    }
}

/// Complete scoring definition for one language or format
#[derive(Debug)]
pub struct LanguageDefinition {
    pub id: LanguageId,
    pub aliases: &'static [&'static str],
    /// Higher wins when two languages tie on score
    pub priority: i32,
    /// Scores below this floor are never reported as this language
    pub min_score: u32,
    pub rules: &'static [Rule],
}

impl LanguageDefinition {
    /// Sum of every capped rule's maximum, `None` if any rule is uncapped.
    #[must_use]
    pub fn max_score(&self) -> Option<u32> {
        self.rules
            .iter()
            .try_fold(0u32, |acc, rule| Some(acc.saturating_add(rule.max_points()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_respect_cap() {
        let rule = Rule::new("t.rule", "x", 3).capped(2);
        assert_eq!(rule.points(0), 0);
        assert_eq!(rule.points(1), 3);
        assert_eq!(rule.points(5), 6);
    }

    #[test]
    fn uncapped_rule_counts_every_match() {
        let rule = Rule::new("t.rule", "x", 2);
        assert_eq!(rule.points(40), 80);
        assert_eq!(rule.max_points(), None);
    }

    #[test]
    fn const_builders_compose() {
        const RULE: Rule = Rule::new("t.rule", "x", 4).capped(3).note("demo");
        assert_eq!(RULE.max_hits, Some(3));
        assert_eq!(RULE.note, Some("demo"));
        assert_eq!(RULE.max_points(), Some(12));
    }

    #[test]
    fn max_score_needs_every_rule_capped() {
        static CAPPED: LanguageDefinition = LanguageDefinition {
            id: LanguageId::Json,
            aliases: &[],
            priority: 1,
            min_score: 1,
            rules: &[
                Rule::new("a", "a", 2).capped(2),
                Rule::new("b", "b", 5).capped(1),
            ],
        };
        static OPEN: LanguageDefinition = LanguageDefinition {
            id: LanguageId::Json,
            aliases: &[],
            priority: 1,
            min_score: 1,
            rules: &[Rule::new("a", "a", 2)],
        };
        assert_eq!(CAPPED.max_score(), Some(9));
        assert_eq!(OPEN.max_score(), None);
    }
}
