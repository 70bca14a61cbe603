//! Error types for rule table construction and code block handling
//!
//! Detection itself never fails; these errors surface only when a rule table,
//! alias catalog or configuration is built from bad input, or when editor
//! markup carries an undecodable original-code attribute.

use thiserror::Error;

use crate::language::LanguageId;

/// Result type alias for detector construction
pub type DetectorResult<T> = Result<T, DetectorError>;

#[derive(Debug, Error)]
pub enum DetectorError {
    /// A rule pattern compiled with neither regex engine
    #[error("Invalid pattern for rule '{rule}' in language '{language}': {message}")]
    InvalidPattern {
        language: LanguageId,
        rule: &'static str,
        message: String,
    },

    /// One alias claimed by two languages
    #[error("Alias '{alias}' is registered for both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: LanguageId,
        second: LanguageId,
    },

    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),

    /// The base64 `data-original-code` attribute could not be decoded
    #[error("Invalid original code attribute: {0}")]
    InvalidOriginalCode(String),

    #[error("Unknown language identifier: {0}")]
    UnknownLanguage(String),
}

impl From<anyhow::Error> for DetectorError {
    fn from(error: anyhow::Error) -> Self {
        DetectorError::InvalidConfig(error.to_string())
    }
}

impl DetectorError {
    /// Language the error is attributed to, if any
    #[must_use]
    pub fn language(&self) -> Option<LanguageId> {
        match self {
            DetectorError::InvalidPattern { language, .. } => Some(*language),
            DetectorError::DuplicateAlias { second, .. } => Some(*second),
            _ => None,
        }
    }
}
