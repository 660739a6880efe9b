//! Custom assertions for test verification

use complexity_core::{classify, estimate, RuleId};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPAN_TAG: Regex = Regex::new(r#"<span class="[^"]*">|</span>"#).unwrap();
}

/// Assert the label `classify` returns for a snippet
pub fn assert_classifies(code: &str, expected: &str) {
    assert_eq!(classify(code), expected, "snippet:\n{code}");
}

/// Assert which rule decided a snippet
pub fn assert_rule(code: &str, expected: RuleId) {
    let result = estimate(code);
    assert_eq!(
        result.rule, expected,
        "expected rule {expected}, got {} for snippet:\n{code}",
        result.rule
    );
}

/// Remove highlighter spans, leaving escaped text
pub fn strip_markup(html: &str) -> String {
    SPAN_TAG.replace_all(html, "").into_owned()
}

/// Reverse `&`, `<`, `>` escaping
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
