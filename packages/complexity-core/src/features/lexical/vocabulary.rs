//! Fixed vocabularies for the highlighter
//!
//! Closed sets; nothing is added at runtime.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Language keywords (control flow, declarations, literals)
    pub static ref KEYWORDS: HashSet<&'static str> = [
        "False", "None", "True", "and", "as", "assert", "async", "await",
        "break", "class", "continue", "def", "del", "elif", "else", "except",
        "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
        "while", "with", "yield",
    ]
    .into_iter()
    .collect();

    /// Built-in function names
    pub static ref BUILTINS: HashSet<&'static str> = [
        "abs", "all", "any", "bool", "dict", "enumerate", "filter", "float",
        "input", "int", "isinstance", "len", "list", "map", "max", "min",
        "open", "print", "range", "reversed", "round", "set", "sorted", "str",
        "sum", "super", "tuple", "type", "zip",
    ]
    .into_iter()
    .collect();
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

pub fn is_builtin(word: &str) -> bool {
    BUILTINS.contains(word)
}
