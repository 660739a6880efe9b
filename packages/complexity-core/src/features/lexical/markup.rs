//! HTML markup for highlighted snippets
//!
//! Each categorized token becomes `<span class="{prefix}{category}">text</span>`;
//! plain text is emitted bare. All text is escaped, so removing the spans and
//! unescaping yields the input.

use super::token::Token;
use super::tokenizer::tokenize;
use crate::config::HighlightConfig;

/// Escape the three characters that matter in element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Renders token streams as HTML
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighter {
    class_prefix: String,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every category class (`tok-` gives `tok-keyword`)
    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::with_class_prefix(config.class_prefix.clone())
    }

    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Highlight a snippet
    pub fn render(&self, code: &str) -> String {
        let tokens = tokenize(code);
        tracing::trace!("Rendering {} tokens", tokens.len());
        self.render_tokens(&tokens)
    }

    pub fn render_tokens(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        for token in tokens {
            match token.kind.css_class() {
                Some(class) => {
                    out.push_str("<span class=\"");
                    out.push_str(&self.class_prefix);
                    out.push_str(class);
                    out.push_str("\">");
                    escape_into(token.text, &mut out);
                    out.push_str("</span>");
                }
                None => escape_into(token.text, &mut out),
            }
        }
        out
    }
}

/// Highlight a snippet with unprefixed class names
pub fn highlight(code: &str) -> String {
    Highlighter::new().render(code)
}

/// Token stream behind [`highlight`]
pub fn highlight_tokens(code: &str) -> Vec<Token<'_>> {
    tokenize(code)
}
