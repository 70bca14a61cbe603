//! Alias index over a set of language definitions

use std::collections::{BTreeSet, HashMap};

use crate::detector::errors::{DetectorError, DetectorResult};
use crate::detector::rules::LanguageDefinition;

use super::LanguageId;

/// Aliases that always resolve to the plain-text fallback
const PLAIN_TEXT_ALIASES: &[&str] = &["text", "txt", "plaintext"];

/// Bidirectional mapping between alias strings and canonical identifiers
///
/// Lookups are case-insensitive and ignore surrounding whitespace. Every
/// canonical identifier resolves to itself.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    index: HashMap<String, LanguageId>,
    aliases: HashMap<LanguageId, Vec<&'static str>>,
}

fn lookup_key(input: &str) -> String {
    input.trim().to_lowercase()
}

impl LanguageCatalog {
    /// Build the index, rejecting aliases claimed by more than one language.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::DuplicateAlias`] when two definitions (or a
    /// definition and a canonical identifier) share an alias.
    pub fn from_definitions(definitions: &[&LanguageDefinition]) -> DetectorResult<Self> {
        let mut catalog = Self {
            index: HashMap::new(),
            aliases: HashMap::new(),
        };

        catalog.register(LanguageId::PlainText, LanguageId::PlainText.as_str())?;
        for alias in PLAIN_TEXT_ALIASES {
            catalog.register_alias(LanguageId::PlainText, *alias)?;
        }

        for def in definitions {
            catalog.register(def.id, def.id.as_str())?;
        }
        for def in definitions {
            for alias in def.aliases {
                catalog.register_alias(def.id, *alias)?;
            }
        }

        Ok(catalog)
    }

    fn register(&mut self, id: LanguageId, name: &str) -> DetectorResult<()> {
        let key = lookup_key(name);
        match self.index.get(&key) {
            Some(existing) if *existing != id => Err(DetectorError::DuplicateAlias {
                alias: key,
                first: *existing,
                second: id,
            }),
            Some(_) => Ok(()),
            None => {
                self.index.insert(key, id);
                Ok(())
            }
        }
    }

    fn register_alias(&mut self, id: LanguageId, alias: &'static str) -> DetectorResult<()> {
        self.register(id, alias)?;
        let list = self.aliases.entry(id).or_default();
        if !list.contains(&alias) {
            list.push(alias);
        }
        Ok(())
    }

    /// Resolve an alias or identifier, `None` when unknown.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<LanguageId> {
        self.index.get(&lookup_key(input)).copied()
    }

    /// Resolve an alias or identifier, falling back to plain text.
    #[must_use]
    pub fn normalize(&self, input: &str) -> LanguageId {
        self.lookup(input).unwrap_or(LanguageId::FALLBACK)
    }

    #[must_use]
    pub fn aliases_of(&self, id: LanguageId) -> &[&'static str] {
        self.aliases.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Every registered alias as authored, sorted and deduplicated
    #[must_use]
    pub fn known_aliases(&self) -> Vec<&'static str> {
        let set: BTreeSet<&'static str> = self.aliases.values().flatten().copied().collect();
        set.into_iter().collect()
    }

    /// Canonical identifiers present in the catalog, sorted
    #[must_use]
    pub fn supported(&self) -> Vec<LanguageId> {
        let set: BTreeSet<LanguageId> = self.index.values().copied().collect();
        set.into_iter().collect()
    }

    /// Curated display name for an alias or identifier, or the uppercased
    /// input when nothing matches.
    #[must_use]
    pub fn display_name(&self, input: &str) -> String {
        match self.lookup(input) {
            Some(id) => id.display_name().to_string(),
            None => input.trim().to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::rules::Rule;

    static YAMLISH: LanguageDefinition = LanguageDefinition {
        id: LanguageId::Yaml,
        aliases: &["yml", "YML"],
        priority: 1,
        min_score: 1,
        rules: &[Rule::new("y.key", r"(?m)^\w+:", 1)],
    };

    static CLASHING: LanguageDefinition = LanguageDefinition {
        id: LanguageId::Toml,
        aliases: &["yml"],
        priority: 1,
        min_score: 1,
        rules: &[],
    };

    #[test]
    fn lookups_ignore_case_and_whitespace() {
        let catalog = LanguageCatalog::from_definitions(&[&YAMLISH]).unwrap();
        assert_eq!(catalog.normalize("  YmL "), LanguageId::Yaml);
        assert_eq!(catalog.normalize("yaml"), LanguageId::Yaml);
        assert_eq!(catalog.normalize("txt"), LanguageId::PlainText);
        assert_eq!(catalog.normalize("cobol"), LanguageId::PlainText);
        assert_eq!(catalog.lookup("cobol"), None);
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let err = LanguageCatalog::from_definitions(&[&YAMLISH, &CLASHING]).unwrap_err();
        match err {
            DetectorError::DuplicateAlias { alias, first, second } => {
                assert_eq!(alias, "yml");
                assert_eq!(first, LanguageId::Yaml);
                assert_eq!(second, LanguageId::Toml);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn aliases_keep_authored_spelling() {
        let catalog = LanguageCatalog::from_definitions(&[&YAMLISH]).unwrap();
        assert_eq!(catalog.aliases_of(LanguageId::Yaml), &["yml", "YML"]);
        assert!(catalog.known_aliases().contains(&"plaintext"));
        assert_eq!(catalog.supported(), vec![LanguageId::PlainText, LanguageId::Yaml]);
    }

    #[test]
    fn display_name_falls_back_to_uppercase() {
        let catalog = LanguageCatalog::from_definitions(&[&YAMLISH]).unwrap();
        assert_eq!(catalog.display_name("yml"), "YAML");
        assert_eq!(catalog.display_name("fortran"), "FORTRAN");
    }
}
