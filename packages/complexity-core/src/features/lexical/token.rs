//! Token model for the highlighter

use serde::{Deserialize, Serialize};

/// Token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Control-flow and declaration words (`for`, `def`, `return`)
    Keyword,
    /// Built-in function names (`len`, `range`, `sorted`)
    Builtin,
    /// Quoted literal, quotes included
    String,
    /// Digits and dots, unvalidated
    Number,
    /// From the comment marker to end of line
    Comment,
    /// Everything else: identifiers, operators, punctuation, whitespace
    Plain,
}

impl TokenKind {
    /// CSS class suffix, `None` for untagged text
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("keyword"),
            Self::Builtin => Some("builtin"),
            Self::String => Some("string"),
            Self::Number => Some("number"),
            Self::Comment => Some("comment"),
            Self::Plain => None,
        }
    }
}

/// A categorized slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
