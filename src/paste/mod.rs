//! Paste and insert integration
//!
//! Decides whether clipboard or typed text should become a labelled code
//! block. This layer only consumes [`DetectionResult`]s; all scoring happens
//! in the detector.
//!
//! Policy:
//! - HTML clipboard content (articles, web pages) is never classified.
//! - Plain text shorter than `min_paste_chars` is pasted as-is.
//! - Otherwise text becomes a code block when the detector reports a real
//!   language with confidence above `code_block_threshold`.

mod code_block;

pub use code_block::{decode_original_code, extract_code_blocks, CodeBlock};

use crate::detector::{DetectionResult, LanguageDetector};
use crate::language::LanguageId;

/// Pasted text shorter than this (in characters) is never classified
pub const DEFAULT_MIN_PASTE_CHARS: usize = 10;

/// Confidence a detection must exceed to become a code block
pub const DEFAULT_CODE_BLOCK_THRESHOLD: f64 = 0.3;

/// Body of an empty code block inserted without a selection
pub const CODE_PLACEHOLDER: &str = "// Enter code here";

/// Clipboard contents offered to the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastePayload {
    pub text: Option<String>,
    pub html: Option<String>,
}

impl PastePayload {
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: None,
        }
    }

    #[must_use]
    pub fn with_html(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            html: Some(html.into()),
        }
    }

    fn has_html(&self) -> bool {
        self.html.as_deref().is_some_and(|html| !html.trim().is_empty())
    }
}

/// What the editor should do with a paste or text insertion
#[derive(Debug, Clone, PartialEq)]
pub enum PasteDecision {
    /// Insert the (cleaned) HTML clipboard content
    FormattedHtml,
    /// Let the editing surface insert the text natively
    NativeText,
    /// Replace the insertion with a labelled code block
    CodeBlock(CodeBlock),
}

impl PasteDecision {
    #[must_use]
    pub fn is_code_block(&self) -> bool {
        matches!(self, PasteDecision::CodeBlock(_))
    }
}

/// Applies the paste/insert policy on top of a [`LanguageDetector`]
#[derive(Debug, Clone)]
pub struct PasteClassifier {
    detector: LanguageDetector,
    min_paste_chars: usize,
    code_block_threshold: f64,
}

impl Default for PasteClassifier {
    fn default() -> Self {
        Self::new(LanguageDetector::default())
    }
}

impl PasteClassifier {
    #[must_use]
    pub fn new(detector: LanguageDetector) -> Self {
        Self {
            detector,
            min_paste_chars: DEFAULT_MIN_PASTE_CHARS,
            code_block_threshold: DEFAULT_CODE_BLOCK_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_min_paste_chars(mut self, chars: usize) -> Self {
        self.min_paste_chars = chars;
        self
    }

    #[must_use]
    pub fn with_code_block_threshold(mut self, threshold: f64) -> Self {
        self.code_block_threshold = threshold;
        self
    }

    #[must_use]
    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    #[must_use]
    pub fn min_paste_chars(&self) -> usize {
        self.min_paste_chars
    }

    #[must_use]
    pub fn code_block_threshold(&self) -> f64 {
        self.code_block_threshold
    }

    /// Decide how a clipboard paste is inserted.
    #[must_use]
    pub fn classify(&self, payload: &PastePayload) -> PasteDecision {
        if payload.has_html() {
            return PasteDecision::FormattedHtml;
        }

        let Some(text) = payload.text.as_deref() else {
            return PasteDecision::NativeText;
        };
        if text.chars().count() < self.min_paste_chars {
            return PasteDecision::NativeText;
        }

        self.decide(text)
    }

    /// Decide how typed or programmatically inserted text is inserted.
    ///
    /// Same policy as [`classify`](Self::classify) without the length gate.
    #[must_use]
    pub fn insert_text(&self, text: &str) -> PasteDecision {
        self.decide(text)
    }

    /// Build the block for the "insert code block" command.
    ///
    /// A non-empty selection is wrapped with its detected language whatever
    /// the confidence. Without one, an empty JavaScript block holding
    /// `initial_code` (or a placeholder) is produced.
    #[must_use]
    pub fn insert_code_block(&self, selection: Option<&str>, initial_code: Option<&str>) -> CodeBlock {
        match selection.map(str::trim).filter(|s| !s.is_empty()) {
            Some(selected) => {
                let detection = self.detector.detect(selected);
                CodeBlock::new(detection.lang, selected, detection.confidence)
            }
            None => {
                let code = initial_code
                    .filter(|code| !code.is_empty())
                    .unwrap_or(CODE_PLACEHOLDER);
                CodeBlock::new(LanguageId::Javascript, code, 0.0)
            }
        }
    }

    fn decide(&self, text: &str) -> PasteDecision {
        let detection: DetectionResult = self.detector.detect(text);
        if detection.is_code_above(self.code_block_threshold) {
            tracing::debug!(
                lang = %detection.lang,
                confidence = detection.confidence,
                "Inserting text as code block"
            );
            PasteDecision::CodeBlock(CodeBlock::new(detection.lang, text, detection.confidence))
        } else {
            PasteDecision::NativeText
        }
    }
}
