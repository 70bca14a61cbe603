pub mod config;
pub mod detector;
pub mod highlight;
pub mod language;
pub mod paste;

pub use config::DetectorConfig;
pub use detector::{
    detect_language, is_code, DetectionResult, DetectorError, DetectorResult, LanguageDetector,
    RuleTable,
};
pub use highlight::{CodeHighlighter, HighlightTheme};
pub use language::{
    display_name, list_known_aliases, list_supported_languages, normalize_language_alias,
    LanguageId,
};
pub use paste::{CodeBlock, PasteClassifier, PasteDecision, PastePayload};
