//! Editor code block markup
//!
//! A code block is stored in the document as
//!
//! ```text
//! <pre class="code-block" data-language="{id}" data-display-name="{name}"
//!      data-original-code="{base64}"><code class="language-{id}">{escaped}</code></pre>
//! ```
//!
//! The rendered `<code>` body is HTML-escaped text, so re-highlighting or
//! exporting always reads the untouched source from `data-original-code`
//! (base64 of the UTF-8 bytes) instead.

use std::sync::LazyLock;

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::detector::errors::{DetectorError, DetectorResult};
use crate::language::{normalize_language_alias, LanguageId};

/// Matches the opening tag of an editor code block
static CODE_BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<pre\s+class="code-block"[^>]*\bdata-language="([^"]*)"[^>]*\bdata-original-code="([A-Za-z0-9+/=]*)"[^>]*>"#)
        .expect("CODE_BLOCK_TAG regex is valid")
});

/// A block of source text labelled with its language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub lang: LanguageId,
    pub code: String,
    /// Detection confidence, 0 when the language was not detected
    pub confidence: f64,
}

impl CodeBlock {
    #[must_use]
    pub fn new(lang: LanguageId, code: impl Into<String>, confidence: f64) -> Self {
        Self {
            lang,
            code: code.into(),
            confidence,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.lang.display_name()
    }

    /// Base64 of the UTF-8 source, as stored in `data-original-code`
    #[must_use]
    pub fn encoded_code(&self) -> String {
        general_purpose::STANDARD.encode(self.code.as_bytes())
    }

    /// Editor markup for this block
    #[must_use]
    pub fn to_html(&self) -> String {
        let id = self.lang.as_str();
        format!(
            r#"<pre class="code-block" data-language="{id}" data-display-name="{name}" data-original-code="{encoded}"><code class="language-{id}">{escaped}</code></pre>"#,
            name = html_escape::encode_double_quoted_attribute(self.display_name()),
            encoded = self.encoded_code(),
            escaped = html_escape::encode_text(&self.code),
        )
    }

    /// Fenced Markdown, with a fence longer than any backtick run in the code
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let longest_run = self
            .code
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run.max(2) + 1);
        let info = if self.lang.is_fallback() { "" } else { self.lang.as_str() };
        format!("{fence}{info}\n{}\n{fence}", self.code.trim_end_matches('\n'))
    }
}

/// Decode a `data-original-code` attribute back to source text.
///
/// # Errors
///
/// Returns [`DetectorError::InvalidOriginalCode`] if the value is not valid
/// base64 or does not decode to UTF-8.
pub fn decode_original_code(attr: &str) -> DetectorResult<String> {
    let bytes = general_purpose::STANDARD
        .decode(attr.trim())
        .map_err(|e| DetectorError::InvalidOriginalCode(format!("base64: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DetectorError::InvalidOriginalCode(format!("utf-8: {e}")))
}

/// Recover every editor code block from document HTML, in document order.
///
/// Blocks whose original code cannot be decoded are skipped with a warning.
#[must_use]
pub fn extract_code_blocks(html: &str) -> Vec<CodeBlock> {
    CODE_BLOCK_TAG
        .captures_iter(html)
        .filter_map(|caps| match decode_original_code(&caps[2]) {
            Ok(code) => Some(CodeBlock::new(normalize_language_alias(&caps[1]), code, 0.0)),
            Err(e) => {
                tracing::warn!("Skipping code block with undecodable source: {e}");
                None
            }
        })
        .collect()
}
