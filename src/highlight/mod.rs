//! Syntax highlighter hand-off
//!
//! Maps detected languages onto highlighter grammar ids and renders code
//! blocks to HTML with syntect. Rendered output is cached per
//! (grammar, theme, content hash). Rendering never fails the caller: any
//! problem degrades to escaped, unstyled `<pre><code>` markup.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use lru::LruCache;
use parking_lot::Mutex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::language::builtin_catalog;
use crate::paste::CodeBlock;

/// Entries kept by [`CodeHighlighter::default`]
pub const DEFAULT_HIGHLIGHT_CACHE_CAPACITY: usize = 500;

/// Grammar ids the highlighter accepts
pub const SUPPORTED_HIGHLIGHT_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "jsx", "tsx", "python", "go", "php", "ruby", "java",
    "csharp", "cpp", "c", "rust", "bash", "powershell", "bat", "yaml", "toml", "ini",
    "dotenv", "json", "jsonc", "html", "xml", "css", "scss", "less", "markdown", "mdx",
    "sql", "docker", "nginx", "apache", "hcl", "log", "csv", "plaintext",
];

const PLAINTEXT: &str = "plaintext";

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

fn supported_grammar(input: &str) -> Option<&'static str> {
    let key = input.trim().to_lowercase();
    SUPPORTED_HIGHLIGHT_LANGUAGES
        .iter()
        .copied()
        .find(|grammar| *grammar == key)
}

/// Grammar id for a language identifier or alias, `plaintext` when unknown.
#[must_use]
pub fn highlighter_language(lang: &str) -> &'static str {
    if let Some(grammar) = supported_grammar(lang) {
        return grammar;
    }
    builtin_catalog()
        .lookup(lang)
        .map_or(PLAINTEXT, |id| id.highlighter_id())
}

#[must_use]
pub fn is_supported_highlight_language(lang: &str) -> bool {
    supported_grammar(lang).is_some()
}

/// Colour scheme for rendered blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightTheme {
    #[default]
    Light,
    Dark,
}

impl HighlightTheme {
    /// Name of the bundled syntect theme
    #[must_use]
    pub const fn syntect_name(self) -> &'static str {
        match self {
            HighlightTheme::Light => "InspiredGitHub",
            HighlightTheme::Dark => "base16-ocean.dark",
        }
    }

    fn theme(self) -> Option<&'static Theme> {
        THEME_SET
            .themes
            .get(self.syntect_name())
            .or_else(|| THEME_SET.themes.values().next())
    }
}

/// Syntect lookup tokens for a grammar id, most specific first.
///
/// The bundled syntaxes have no TypeScript, TOML, Dockerfile or Nginx
/// grammar; those borrow the closest relative or stay plain.
fn syntect_tokens(grammar: &str) -> &'static [&'static str] {
    match grammar {
        "javascript" | "jsx" => &["js"],
        "typescript" | "tsx" => &["ts", "js"],
        "python" => &["py"],
        "go" => &["go"],
        "php" => &["php"],
        "ruby" => &["rb"],
        "java" => &["java"],
        "csharp" => &["cs"],
        "cpp" => &["cpp"],
        "c" => &["c"],
        "rust" => &["rs"],
        "bash" | "dotenv" | "docker" => &["sh"],
        "powershell" => &["ps1"],
        "bat" => &["bat"],
        "yaml" => &["yaml"],
        "toml" | "ini" => &["toml", "ini"],
        "json" | "jsonc" => &["json"],
        "html" => &["html"],
        "xml" => &["xml"],
        "css" | "scss" | "less" => &["scss", "css"],
        "markdown" | "mdx" => &["md"],
        "sql" => &["sql"],
        _ => &[],
    }
}

fn find_syntax(grammar: &str) -> Option<&'static SyntaxReference> {
    syntect_tokens(grammar)
        .iter()
        .find_map(|token| SYNTAX_SET.find_syntax_by_token(token))
}

/// Escaped, unstyled rendering used whenever highlighting is unavailable
fn plain_html(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", html_escape::encode_text(code))
}

type CacheKey = (&'static str, HighlightTheme, u64);

/// HTML renderer with an LRU cache of rendered blocks
///
/// Safe to share between threads; the cache sits behind a mutex.
pub struct CodeHighlighter {
    cache: Mutex<LruCache<CacheKey, String>>,
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HIGHLIGHT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for CodeHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeHighlighter")
            .field("cached_entries", &self.cached_entries())
            .finish()
    }
}

impl CodeHighlighter {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Render `code` as HTML using the grammar for `lang` (identifier or alias).
    pub fn highlight(&self, code: &str, lang: &str, theme: HighlightTheme) -> String {
        let grammar = highlighter_language(lang);
        let key = (grammar, theme, xxhash_rust::xxh3::xxh3_64(code.as_bytes()));

        if let Some(hit) = self.cache.lock().get(&key) {
            return hit.clone();
        }

        let rendered = render(code, grammar, theme);
        let evicted = self.cache.lock().push(key, rendered.clone());
        if matches!(evicted, Some((old_key, _)) if old_key != key) {
            log::trace!("Highlight cache at capacity, evicted oldest entry");
        }
        rendered
    }

    /// Render an editor code block from its original source.
    pub fn highlight_block(&self, block: &CodeBlock, theme: HighlightTheme) -> String {
        self.highlight(&block.code, block.lang.as_str(), theme)
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.cache.lock().len()
    }
}

fn render(code: &str, grammar: &'static str, theme: HighlightTheme) -> String {
    if grammar == PLAINTEXT {
        return plain_html(code);
    }

    let Some(syntax) = find_syntax(grammar) else {
        log::debug!("No bundled syntax for grammar '{grammar}', rendering plain");
        return plain_html(code);
    };
    let Some(theme) = theme.theme() else {
        log::warn!("No syntect themes available, rendering plain");
        return plain_html(code);
    };

    match highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme) {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Highlighting as '{grammar}' failed, rendering plain: {e}");
            plain_html(code)
        }
    }
}
