//! Feature modules - Each feature is a vertical slice
//!
//! Each feature contains some of:
//! - domain/         - Pure types (no external dependencies)
//! - application/    - Use cases
//! - infrastructure/ - Scanners, caches, rule tables

// Heuristic Big-O estimation
pub mod cost_analysis;

// Tokenizer and HTML highlighter
pub mod lexical;

// Free-text analysis report parsing and rendering
pub mod report;
