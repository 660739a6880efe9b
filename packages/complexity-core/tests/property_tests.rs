//! Property-based tests for the estimator and highlighter
//!
//! Invariants that should hold for ALL inputs:
//! - Totality: classify and highlight return for any string
//! - Round trip: stripping markup and unescaping yields the input
//! - Escaping: no raw `<`, `>`, `&` from the input survive
//! - No loop keyword (and no calls) ⇒ O(1)

mod common;

use common::{fixture_nested_loops, fixture_sequential_loops, strip_markup, unescape_html};
use complexity_core::features::lexical::{tokenize, Highlighter};
use complexity_core::{classify, highlight, ComplexityClass};
use lazy_static::lazy_static;
use proptest::prelude::*;
use regex::Regex;

lazy_static! {
    static ref LOOP_WORD: Regex = Regex::new(r"\b(?:for|while)\b").unwrap();
}

// Python-ish text: keywords, quotes, comments, operators, indentation
fn python_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("for ".to_string()),
            Just("while ".to_string()),
            Just(" in ".to_string()),
            Just("def f(".to_string()),
            Just("sorted(".to_string()),
            Just("# note".to_string()),
            Just("\n    ".to_string()),
            Just("\n".to_string()),
            Just("'".to_string()),
            Just("\"".to_string()),
            Just("\\".to_string()),
            Just(" < ".to_string()),
            Just(" & ".to_string()),
            "[a-z_]{1,6}",
            "[0-9.]{1,4}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

// Straight-line code: no parentheses, so no calls or definitions
fn loop_free() -> impl Strategy<Value = String> {
    "[a-z0-9 =+*\n\t]{0,200}".prop_filter("no loop keyword", |s| !LOOP_WORD.is_match(s))
}

proptest! {
    /// Property: classify always yields an O(...) label
    #[test]
    fn prop_classify_total(code in any::<String>()) {
        let label = classify(&code);
        prop_assert!(label.starts_with("O(") && label.ends_with(')'), "label {label}");
    }

    #[test]
    fn prop_classify_total_python_like(code in python_like()) {
        let label = classify(&code);
        prop_assert!(ComplexityClass::from_label(&label).is_some());
    }

    /// Property: markup round-trips to the input
    #[test]
    fn prop_highlight_round_trip(code in any::<String>()) {
        prop_assert_eq!(unescape_html(&strip_markup(&highlight(&code))), code);
    }

    #[test]
    fn prop_highlight_round_trip_python_like(code in python_like()) {
        let html = Highlighter::with_class_prefix("p-").render(&code);
        prop_assert_eq!(unescape_html(&strip_markup(&html)), code);
    }

    /// Property: input text is always escaped
    #[test]
    fn prop_no_raw_markup_characters(code in python_like()) {
        let text = strip_markup(&highlight(&code));
        prop_assert!(!text.contains('<') && !text.contains('>'));
        let bare_amp = text
            .match_indices('&')
            .any(|(i, _)| !["&amp;", "&lt;", "&gt;"].iter().any(|e| text[i..].starts_with(e)));
        prop_assert!(!bare_amp, "unescaped & in {text}");
    }

    /// Property: tokens partition the input
    #[test]
    fn prop_tokens_concatenate(code in python_like()) {
        let rebuilt: String = tokenize(&code).iter().map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, code);
    }

    /// Property: no loop keyword ⇒ O(1)
    #[test]
    fn prop_no_loop_is_constant(code in loop_free()) {
        prop_assert_eq!(classify(&code), "O(1)");
    }

    /// Property: sequential top-level loops never accumulate
    #[test]
    fn prop_sequential_loops_linear(count in 1..8usize) {
        prop_assert_eq!(classify(&fixture_sequential_loops(count)), "O(n)");
    }

    /// Property: nested loops map through the depth table
    #[test]
    fn prop_nested_loops_follow_depth(depth in 1..8usize) {
        prop_assert_eq!(
            classify(&fixture_nested_loops(depth)),
            ComplexityClass::from_nesting_depth(depth).as_str()
        );
    }
}
