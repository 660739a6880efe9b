//! Ordered classification rules
//!
//! Each rule is a named predicate over a pre-scanned [`Snippet`]. Rules are
//! evaluated top to bottom and the first match wins; several patterns
//! overlap (a recursive binary search also has loops, a sort call may sit
//! inside a loop), so the order in [`RULES`] is part of the contract.

use crate::features::cost_analysis::domain::{ComplexityClass, RuleId};
use crate::features::cost_analysis::infrastructure::nesting::NestingScanner;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHILE_KEYWORD: Regex = Regex::new(r"\bwhile\b").unwrap();
    static ref LOOP_KEYWORD: Regex = Regex::new(r"\b(?:for|while)\b").unwrap();
    static ref LOW_BOUND: Regex = Regex::new(r"\b(?:left|low)\b").unwrap();
    static ref HIGH_BOUND: Regex = Regex::new(r"\b(?:right|high)\b").unwrap();
    static ref MID: Regex = Regex::new(r"\bmid\b").unwrap();
    static ref MIDPOINT: Regex = Regex::new(r"\b(?:mid|m)\b").unwrap();
    static ref HALVING: Regex = Regex::new(r"//?\s*2").unwrap();
    static ref FUNCTION_DEF: Regex = Regex::new(r"\bdef\s+([A-Za-z_]\w*)\s*\(").unwrap();
    static ref SORT_CALL: Regex = Regex::new(r"\.sort\s*\(|\bsorted\s*\(").unwrap();
    /// `for <target> in` up to the first `in`; that `in` iterates, it does not test
    static ref FOR_IN_HEADER: Regex = Regex::new(r"\bfor\b[^\n:]*?\bin\b").unwrap();
    static ref IN_KEYWORD: Regex = Regex::new(r"\bin\b").unwrap();
}

/// Facts about a snippet gathered in one linear pass per pattern
#[derive(Debug)]
pub struct Snippet<'a> {
    pub code: &'a str,
    lowered: String,
    /// Name of the first `def` in the snippet
    pub function_name: Option<String>,
    /// `name(` occurrences, the definition header included
    pub self_call_count: usize,
    pub max_depth: usize,
}

impl<'a> Snippet<'a> {
    pub fn scan(code: &'a str) -> Self {
        let function_name = FUNCTION_DEF
            .captures(code)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let self_call_count = function_name
            .as_deref()
            .map_or(0, |name| count_calls(code, name));

        Self {
            code,
            lowered: code.to_lowercase(),
            function_name,
            self_call_count,
            max_depth: NestingScanner::max_depth(code),
        }
    }

    fn mentions(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    fn has_halving(&self) -> bool {
        HALVING.is_match(self.code)
    }

    pub fn has_loop_keyword(&self) -> bool {
        LOOP_KEYWORD.is_match(self.code)
    }

    /// `x in collection` outside `for` headers, excluding `in range(...)`
    pub fn has_membership_test(&self) -> bool {
        let without_headers = FOR_IN_HEADER.replace_all(self.code, "");
        IN_KEYWORD.find_iter(&without_headers).any(|m| {
            !without_headers[m.end()..]
                .trim_start()
                .starts_with("range")
        })
    }
}

/// Count `name(` occurrences on word boundaries
fn count_calls(code: &str, name: &str) -> usize {
    match Regex::new(&format!(r"\b{}\(", regex::escape(name))) {
        Ok(pattern) => pattern.find_iter(code).count(),
        Err(e) => {
            tracing::warn!("Could not build call pattern for {}: {}", name, e);
            0
        }
    }
}

/// A single classification rule
pub struct Rule {
    pub id: RuleId,
    pub apply: fn(&Snippet<'_>) -> Option<ComplexityClass>,
}

/// Rules in priority order; the first `Some` wins
pub const RULES: &[Rule] = &[
    Rule {
        id: RuleId::IterativeBinarySearch,
        apply: iterative_binary_search,
    },
    Rule {
        id: RuleId::ExponentialRecursion,
        apply: exponential_recursion,
    },
    Rule {
        id: RuleId::DivideAndConquer,
        apply: divide_and_conquer,
    },
    Rule {
        id: RuleId::RecursiveBinarySearch,
        apply: recursive_binary_search,
    },
    Rule {
        id: RuleId::BuiltinSort,
        apply: builtin_sort,
    },
    Rule {
        id: RuleId::MembershipInLoop,
        apply: membership_in_loop,
    },
    Rule {
        id: RuleId::NestingDepth,
        apply: nesting_depth,
    },
    Rule {
        id: RuleId::NoLoops,
        apply: no_loops,
    },
];

/// Class for snippets no rule recognizes
pub const DEFAULT_CLASS: ComplexityClass = ComplexityClass::Linear;

fn iterative_binary_search(s: &Snippet<'_>) -> Option<ComplexityClass> {
    let code = s.code;
    (WHILE_KEYWORD.is_match(code)
        && LOW_BOUND.is_match(code)
        && HIGH_BOUND.is_match(code)
        && MID.is_match(code)
        && s.has_halving())
    .then_some(ComplexityClass::Logarithmic)
}

fn exponential_recursion(s: &Snippet<'_>) -> Option<ComplexityClass> {
    (s.self_call_count > 2 && s.mentions("fib")).then_some(ComplexityClass::Exponential)
}

fn divide_and_conquer(s: &Snippet<'_>) -> Option<ComplexityClass> {
    (s.self_call_count >= 3 && (s.mentions("merge") || s.mentions("partition")))
        .then_some(ComplexityClass::Linearithmic)
}

fn recursive_binary_search(s: &Snippet<'_>) -> Option<ComplexityClass> {
    // Header plus exactly one recursive call site
    (s.self_call_count == 2 && MIDPOINT.is_match(s.code) && s.has_halving())
        .then_some(ComplexityClass::Logarithmic)
}

fn builtin_sort(s: &Snippet<'_>) -> Option<ComplexityClass> {
    SORT_CALL
        .is_match(s.code)
        .then_some(ComplexityClass::Linearithmic)
}

fn membership_in_loop(s: &Snippet<'_>) -> Option<ComplexityClass> {
    (s.max_depth >= 1 && s.has_membership_test()).then_some(ComplexityClass::Quadratic)
}

fn nesting_depth(s: &Snippet<'_>) -> Option<ComplexityClass> {
    (s.max_depth >= 1).then(|| ComplexityClass::from_nesting_depth(s.max_depth))
}

fn no_loops(s: &Snippet<'_>) -> Option<ComplexityClass> {
    (!s.has_loop_keyword()).then_some(ComplexityClass::Constant)
}

/// Run [`RULES`] in order against a scanned snippet
pub fn evaluate(snippet: &Snippet<'_>) -> (ComplexityClass, RuleId) {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(snippet).map(|class| (class, rule.id)))
        .unwrap_or((DEFAULT_CLASS, RuleId::Default))
}
