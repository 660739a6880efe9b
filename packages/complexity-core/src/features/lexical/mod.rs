//! Lexical Highlighter
//!
//! Hand-rolled tokenizer for Python-like snippets and an HTML renderer on
//! top of it.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Highlighter (markup.rs)                  │
//! │   ↓ render                               │
//! │ tokenize (tokenizer.rs)                  │
//! │   ↓ per line: comment split, scan        │
//! │ Token { kind, text } (token.rs)          │
//! │   ↑ keyword / builtin sets               │
//! │ vocabulary.rs                            │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use complexity_core::features::lexical::highlight;
//!
//! let html = highlight("for i in range(10):");
//! assert!(html.starts_with("<span class=\"keyword\">for</span>"));
//! ```

pub mod markup;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;

pub use markup::{escape_html, highlight, highlight_tokens, Highlighter};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_line, COMMENT_MARKER};
pub use vocabulary::{is_builtin, is_keyword, BUILTINS, KEYWORDS};
