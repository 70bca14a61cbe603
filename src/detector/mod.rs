//! Rule-based language detection
//!
//! Text is scored against a table of weighted regex rules per language. The
//! best-scoring language wins (priority breaks ties), provided it reaches its
//! own minimum score; otherwise the result is the plain-text fallback.
//!
//! ```text
//! text -> prepare_sample -> score_all (RuleTable) -> resolve -> DetectionResult
//! ```

pub mod compiled;
pub mod engine;
pub mod errors;
pub mod resolver;
pub mod result;
pub mod rules;
pub mod scorer;
pub mod table;

pub use compiled::{CompiledLanguage, CompiledRule, RuleTable};
pub use engine::{default_detector, detect_language, is_code, LanguageDetector, REASON_EMPTY_INPUT};
pub use errors::{DetectorError, DetectorResult};
pub use resolver::REASON_NO_MATCH;
pub use result::DetectionResult;
pub use rules::{LanguageDefinition, Rule};
pub use scorer::{LanguageScore, RuleHit};
pub use table::ALL_LANGUAGES;
