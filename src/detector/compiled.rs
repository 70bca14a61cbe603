//! Precompiled rule tables
//!
//! Every pattern is compiled once when a [`RuleTable`] is built. Patterns the
//! `regex` engine accepts stay on it (linear time, usable in a `RegexSet`
//! prefilter); the few that need look-around fall back to `fancy-regex`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::errors::{DetectorError, DetectorResult};
use super::rules::{LanguageDefinition, Rule};
use super::table::ALL_LANGUAGES;
use crate::language::{LanguageCatalog, LanguageId};

/// Compiled form of a single rule pattern
#[derive(Debug)]
enum Matcher {
    Plain(Regex),
    Fancy(fancy_regex::Regex),
}

impl Matcher {
    fn compile(pattern: &str) -> Result<Self, String> {
        match Regex::new(pattern) {
            Ok(re) => Ok(Matcher::Plain(re)),
            Err(plain_err) => fancy_regex::Regex::new(pattern)
                .map(Matcher::Fancy)
                .map_err(|fancy_err| format!("{plain_err}; fancy-regex: {fancy_err}")),
        }
    }

    /// Count non-overlapping matches, stopping once `limit` is reached.
    fn count(&self, text: &str, limit: Option<u32>) -> u32 {
        let limit = limit.unwrap_or(u32::MAX);
        let mut count = 0u32;
        match self {
            Matcher::Plain(re) => {
                for _ in re.find_iter(text) {
                    count += 1;
                    if count >= limit {
                        break;
                    }
                }
            }
            Matcher::Fancy(re) => {
                for found in re.find_iter(text) {
                    match found {
                        Ok(_) => {
                            count += 1;
                            if count >= limit {
                                break;
                            }
                        }
                        Err(e) => {
                            // Backtrack limit hit: keep what was counted so far
                            tracing::trace!(error = %e, "fancy-regex match aborted");
                            break;
                        }
                    }
                }
            }
        }
        count
    }
}

/// A rule paired with its compiled matcher
#[derive(Debug)]
pub struct CompiledRule {
    pub rule: &'static Rule,
    matcher: Matcher,
    /// Index into the language's prefilter set, for `regex`-compiled rules
    set_index: Option<usize>,
}

impl CompiledRule {
    #[must_use]
    pub fn uses_backtracking(&self) -> bool {
        matches!(self.matcher, Matcher::Fancy(_))
    }
}

/// Pre-compiled patterns for one language
///
/// Uses a `RegexSet` to find which plain rules match at all, then counts only
/// those individually.
#[derive(Debug)]
pub struct CompiledLanguage {
    pub definition: &'static LanguageDefinition,
    prefilter: Option<RegexSet>,
    rules: Vec<CompiledRule>,
}

impl CompiledLanguage {
    /// Compile every rule of `definition`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::InvalidPattern`] naming the first rule that
    /// neither engine accepts.
    pub fn compile(definition: &'static LanguageDefinition) -> DetectorResult<Self> {
        let mut rules = Vec::with_capacity(definition.rules.len());
        let mut plain_patterns = Vec::new();

        for rule in definition.rules {
            let matcher =
                Matcher::compile(rule.pattern).map_err(|message| DetectorError::InvalidPattern {
                    language: definition.id,
                    rule: rule.id,
                    message,
                })?;
            let set_index = match matcher {
                Matcher::Plain(_) => {
                    plain_patterns.push(rule.pattern);
                    Some(plain_patterns.len() - 1)
                }
                Matcher::Fancy(_) => None,
            };
            rules.push(CompiledRule {
                rule,
                matcher,
                set_index,
            });
        }

        // Without a set every plain rule is simply counted directly
        let prefilter = if plain_patterns.is_empty() {
            None
        } else {
            RegexSet::new(&plain_patterns).ok()
        };

        Ok(Self {
            definition,
            prefilter,
            rules,
        })
    }

    #[must_use]
    pub fn id(&self) -> LanguageId {
        self.definition.id
    }

    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Match count per rule, capped at its `max_hits`, in table order.
    pub fn match_counts(&self, sample: &str) -> Vec<u32> {
        let matched = self.prefilter.as_ref().map(|set| set.matches(sample));

        self.rules
            .iter()
            .map(|compiled| {
                if let (Some(matched), Some(idx)) = (&matched, compiled.set_index) {
                    if !matched.matched(idx) {
                        return 0;
                    }
                }
                compiled.matcher.count(sample, compiled.rule.max_hits)
            })
            .collect()
    }
}

/// Immutable, precompiled set of language definitions
#[derive(Debug)]
pub struct RuleTable {
    languages: Vec<CompiledLanguage>,
}

static BUILTIN_TABLE: Lazy<Arc<RuleTable>> = Lazy::new(|| {
    Arc::new(RuleTable::compile(ALL_LANGUAGES).expect("Invalid regex pattern in built-in rule table"))
});

impl RuleTable {
    /// Compile a table from static definitions.
    ///
    /// Definition order is kept; it decides full ties (equal score and
    /// priority) in favour of the earlier entry.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::InvalidPattern`] for the first pattern that
    /// fails to compile.
    pub fn compile(definitions: &[&'static LanguageDefinition]) -> DetectorResult<Self> {
        let languages = definitions
            .iter()
            .map(|def| CompiledLanguage::compile(*def))
            .collect::<DetectorResult<Vec<_>>>()?;

        let table = Self { languages };
        tracing::debug!(
            languages = table.len(),
            rules = table.rule_count(),
            "Compiled language rule table"
        );
        Ok(table)
    }

    /// The built-in table, compiled on first use and shared process-wide
    #[must_use]
    pub fn builtin() -> Arc<RuleTable> {
        Arc::clone(&BUILTIN_TABLE)
    }

    #[must_use]
    pub fn languages(&self) -> &[CompiledLanguage] {
        &self.languages
    }

    pub fn definitions(&self) -> impl Iterator<Item = &'static LanguageDefinition> + '_ {
        self.languages.iter().map(|lang| lang.definition)
    }

    #[must_use]
    pub fn get(&self, id: LanguageId) -> Option<&CompiledLanguage> {
        self.languages.iter().find(|lang| lang.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.languages.iter().map(|lang| lang.rules.len()).sum()
    }

    /// Alias catalog covering exactly this table's languages.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::DuplicateAlias`] if two definitions share an alias.
    pub fn catalog(&self) -> DetectorResult<LanguageCatalog> {
        let definitions: Vec<&LanguageDefinition> = self.definitions().collect();
        LanguageCatalog::from_definitions(&definitions)
    }
}
