//! Paste, insert and code block markup behaviour

use kodegen_tools_codesniff::paste::{
    decode_original_code, extract_code_blocks, CODE_PLACEHOLDER, DEFAULT_CODE_BLOCK_THRESHOLD,
};
use kodegen_tools_codesniff::{
    DetectorConfig, LanguageDetector, LanguageId, PasteClassifier, PasteDecision, PastePayload,
};

mod common;
use common::{COMPOSE, DOCKERFILE, PROSE, RUST_SNIPPET, SQL_SELECT};

fn expect_block(decision: PasteDecision) -> kodegen_tools_codesniff::CodeBlock {
    match decision {
        PasteDecision::CodeBlock(block) => block,
        other => panic!("expected a code block, got {other:?}"),
    }
}

#[test]
fn test_pasted_dockerfile_becomes_labelled_block() {
    common::init_tracing();
    let classifier = PasteClassifier::default();
    let block = expect_block(classifier.classify(&PastePayload::plain_text(DOCKERFILE)));

    assert_eq!(block.lang, LanguageId::Dockerfile);
    assert_eq!(block.display_name(), "Dockerfile");
    let html = block.to_html();
    assert!(html.contains(r#"data-language="dockerfile""#));
    assert!(html.contains(r#"data-display-name="Dockerfile""#));
    assert!(html.contains(r#"<code class="language-dockerfile">"#));
    assert!(html.contains(r#"CMD ["npm","start"]</code></pre>"#));
}

#[test]
fn test_html_clipboard_wins_over_detection() {
    let classifier = PasteClassifier::default();
    let payload = PastePayload::with_html(RUST_SNIPPET, "<pre>fn main() {}</pre>");
    assert_eq!(classifier.classify(&payload), PasteDecision::FormattedHtml);
}

#[test]
fn test_prose_and_short_text_paste_natively() {
    let classifier = PasteClassifier::default();
    assert_eq!(classifier.classify(&PastePayload::plain_text(PROSE)), PasteDecision::NativeText);
    assert_eq!(classifier.classify(&PastePayload::plain_text("SELECT 1")), PasteDecision::NativeText);
}

#[test]
fn test_length_gate_counts_characters() {
    // Nine characters, more than nine bytes
    let classifier = PasteClassifier::default();
    let text = "ключ=знач";
    assert_eq!(text.chars().count(), 9);
    assert_eq!(classifier.classify(&PastePayload::plain_text(text)), PasteDecision::NativeText);
}

#[test]
fn test_threshold_is_exclusive() {
    // SQL_SELECT detects at 10 / (10 * 2.2) ~ 0.4545
    let lenient = PasteClassifier::default();
    assert!(lenient.classify(&PastePayload::plain_text(SQL_SELECT)).is_code_block());

    let strict = PasteClassifier::default().with_code_block_threshold(0.5);
    assert_eq!(strict.classify(&PastePayload::plain_text(SQL_SELECT)), PasteDecision::NativeText);
}

#[test]
fn test_insert_text_skips_length_gate() {
    let classifier = PasteClassifier::default().with_min_paste_chars(1_000);
    assert_eq!(classifier.classify(&PastePayload::plain_text(COMPOSE)), PasteDecision::NativeText);
    let block = expect_block(classifier.insert_text(COMPOSE));
    assert_eq!(block.lang, LanguageId::DockerCompose);
    assert!(block.confidence > DEFAULT_CODE_BLOCK_THRESHOLD);
}

#[test]
fn test_insert_code_block_uses_selection_language() {
    let classifier = PasteClassifier::default();
    let block = classifier.insert_code_block(Some(&format!("\n{RUST_SNIPPET}\n\n")), None);
    assert_eq!(block.lang, LanguageId::Rust);
    assert_eq!(block.code, RUST_SNIPPET);

    // Low confidence still labels the selection
    let weak = classifier.insert_code_block(Some("x = 1"), None);
    assert_eq!(weak.lang, LanguageId::PlainText);
    assert_eq!(weak.code, "x = 1");

    let empty = classifier.insert_code_block(None, None);
    assert_eq!(empty.lang, LanguageId::Javascript);
    assert_eq!(empty.code, CODE_PLACEHOLDER);
}

#[test]
fn test_classifier_honours_detector_config() {
    let config = DetectorConfig::builder().confidence_scale(10.0).build().unwrap();
    let classifier = PasteClassifier::new(LanguageDetector::with_config(config));
    // 34 / (20 * 10) = 0.17
    assert_eq!(classifier.classify(&PastePayload::plain_text(DOCKERFILE)), PasteDecision::NativeText);
    assert_eq!(classifier.detector().config().confidence_scale(), 10.0);
}

#[test]
fn test_document_round_trip() {
    let classifier = PasteClassifier::default();
    let blocks: Vec<_> = [DOCKERFILE, RUST_SNIPPET, COMPOSE]
        .into_iter()
        .map(|text| expect_block(classifier.insert_text(text)))
        .collect();

    let document: String = blocks
        .iter()
        .map(|block| format!("<p>see below</p>\n{}", block.to_html()))
        .collect();

    let recovered = extract_code_blocks(&document);
    assert_eq!(recovered.len(), 3);
    for (original, restored) in blocks.iter().zip(&recovered) {
        assert_eq!(original.lang, restored.lang);
        assert_eq!(original.code, restored.code);
        assert_eq!(decode_original_code(&original.encoded_code()).unwrap(), original.code);
    }
}

#[test]
fn test_markdown_export() {
    let block = expect_block(PasteClassifier::default().insert_text(DOCKERFILE));
    let markdown = block.to_markdown();
    assert!(markdown.starts_with("```dockerfile\nFROM node:18-alpine"));
    assert!(markdown.ends_with("\n```"));
}
