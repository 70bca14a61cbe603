//! Highlighter rendering, caching and fallback

use std::sync::Arc;
use std::thread;

use kodegen_tools_codesniff::highlight::{
    highlighter_language, is_supported_highlight_language, SUPPORTED_HIGHLIGHT_LANGUAGES,
};
use kodegen_tools_codesniff::paste::CodeBlock;
use kodegen_tools_codesniff::{CodeHighlighter, HighlightTheme, LanguageId};

mod common;
use common::{DOCKERFILE, RUST_SNIPPET};

#[test]
fn test_every_identifier_has_a_supported_grammar() {
    for id in LanguageId::ALL {
        let grammar = id.highlighter_id();
        assert!(
            SUPPORTED_HIGHLIGHT_LANGUAGES.contains(&grammar),
            "{id} maps to unsupported grammar {grammar}"
        );
        assert_eq!(highlighter_language(id.as_str()), grammar);
    }
    assert!(is_supported_highlight_language("plaintext"));
}

#[test]
fn test_rust_is_highlighted() {
    common::init_tracing();
    let highlighter = CodeHighlighter::default();
    let html = highlighter.highlight(RUST_SNIPPET, "rust", HighlightTheme::Light);
    assert!(html.contains("<span"), "expected styled spans: {html}");
    assert!(html.contains("HashMap"));
}

#[test]
fn test_unknown_language_renders_escaped_plain_text() {
    let highlighter = CodeHighlighter::default();
    let html = highlighter.highlight("if a < b { c }", "cobol", HighlightTheme::Dark);
    assert_eq!(html, "<pre><code>if a &lt; b { c }</code></pre>");
}

#[test]
fn test_grammar_without_bundled_syntax_falls_back() {
    let highlighter = CodeHighlighter::default();
    let html = highlighter.highlight("server { listen 80; }", "nginx", HighlightTheme::Light);
    assert_eq!(html, "<pre><code>server { listen 80; }</code></pre>");
}

#[test]
fn test_cache_is_keyed_by_grammar_theme_and_content() {
    let highlighter = CodeHighlighter::default();
    let first = highlighter.highlight(DOCKERFILE, "dockerfile", HighlightTheme::Light);
    assert_eq!(highlighter.cached_entries(), 1);

    // Alias of the same grammar reuses the entry
    let again = highlighter.highlight(DOCKERFILE, "docker", HighlightTheme::Light);
    assert_eq!(first, again);
    assert_eq!(highlighter.cached_entries(), 1);

    highlighter.highlight(DOCKERFILE, "dockerfile", HighlightTheme::Dark);
    highlighter.highlight("RUN true", "dockerfile", HighlightTheme::Light);
    assert_eq!(highlighter.cached_entries(), 3);

    highlighter.clear_cache();
    assert_eq!(highlighter.cached_entries(), 0);
}

#[test]
fn test_cache_capacity_is_bounded() {
    let highlighter = CodeHighlighter::with_capacity(4);
    for i in 0..10 {
        highlighter.highlight(&format!("echo {i}"), "bash", HighlightTheme::Light);
    }
    assert_eq!(highlighter.cached_entries(), 4);
}

#[test]
fn test_highlight_block_uses_block_language() {
    let highlighter = CodeHighlighter::default();
    let block = CodeBlock::new(LanguageId::Rust, RUST_SNIPPET, 1.0);
    assert_eq!(
        highlighter.highlight_block(&block, HighlightTheme::Dark),
        highlighter.highlight(RUST_SNIPPET, "rs", HighlightTheme::Dark)
    );
}

#[test]
fn test_shared_across_threads() {
    let highlighter = Arc::new(CodeHighlighter::with_capacity(16));
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let highlighter = Arc::clone(&highlighter);
            thread::spawn(move || highlighter.highlight(&format!("x = {n}"), "python", HighlightTheme::Light))
        })
        .collect();
    for handle in handles {
        assert!(!handle.join().unwrap().is_empty());
    }
    assert_eq!(highlighter.cached_entries(), 4);
}
