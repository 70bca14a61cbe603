use kodegen_tools_codesniff::detector::{LanguageDetector, RuleTable};
use kodegen_tools_codesniff::{detect_language, LanguageId};
use std::time::{Duration, Instant};

/// Generous bound: tests usually run unoptimised and every language is scored
const BUDGET: Duration = Duration::from_secs(5);

fn assert_fast(label: &str, input: &str) -> LanguageId {
    let start = Instant::now();
    let result = detect_language(input);
    let elapsed = start.elapsed();

    println!("{label}: {elapsed:?} -> {}", result.lang);
    assert!(
        elapsed < BUDGET,
        "ReDoS vulnerability detected in {label}: took {elapsed:?}"
    );
    assert!((0.0..=1.0).contains(&result.confidence));
    result.lang
}

/// Test that rule patterns are resistant to `ReDoS` (Regular Expression Denial of Service)
///
/// Almost every rule runs on the `regex` crate's finite automata. The
/// backtracking engine only sees the PowerShell variable rule, whose
/// lookbehind is a single character.
#[test]
fn test_redos_resistance_single_character_run() {
    assert_fast("single character run", &"a".repeat(50_000));
}

#[test]
fn test_redos_resistance_unclosed_tags() {
    assert_fast("unclosed tags", &"<div class=\"".repeat(5_000));
}

#[test]
fn test_redos_resistance_nested_braces() {
    let adversarial = "{".repeat(10_000) + &"}".repeat(10_000);
    assert_fast("nested braces", &adversarial);
}

#[test]
fn test_redos_resistance_escaped_variables() {
    // Every `$` is preceded by a backtick, so the lookbehind rule rejects each candidate
    assert_fast("escaped variables", &"`$a".repeat(8_000));
}

#[test]
fn test_redos_resistance_long_line_without_terminator() {
    let adversarial = "SELECT ".to_string() + &"col, ".repeat(6_000);
    assert_fast("unterminated select", &adversarial);
}

#[test]
fn test_redos_resistance_many_short_lines() {
    assert_fast("short lines", &"x:\n".repeat(10_000));
    assert_fast("comment lines", &"# \n".repeat(10_000));
}

#[test]
fn test_input_beyond_sample_window_is_ignored() {
    // The scorer only sees the first 20 000 characters
    let mut input = "FROM alpine:3.19\nRUN apk add curl\nCMD [\"sh\"]\n".to_string();
    input.push_str(&"$x = 1; ".repeat(200_000));
    let lang = assert_fast("oversized input", &input);
    assert_eq!(lang, LanguageId::Powershell, "sample window is mostly PowerShell variables");

    let detector = LanguageDetector::new(RuleTable::builtin(), Default::default());
    let start = Instant::now();
    let _ = detector.detect(&"z".repeat(5 * 1024 * 1024));
    assert!(start.elapsed() < BUDGET, "5 MB input took {:?}", start.elapsed());
}

#[test]
fn test_builtin_table_uses_backtracking_sparingly() {
    let table = RuleTable::builtin();
    let fancy: Vec<&str> = table
        .languages()
        .iter()
        .flat_map(|lang| lang.rules())
        .filter(|rule| rule.uses_backtracking())
        .map(|rule| rule.rule.id)
        .collect();
    assert_eq!(fancy, vec!["ps.var"]);
}
