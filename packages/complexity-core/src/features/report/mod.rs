//! Analysis Report
//!
//! Parses the free-text report produced by an external analyzer into
//! labeled fields and fenced code blocks, and renders it as HTML with the
//! code blocks highlighted.
//!
//! # Usage
//!
//! ```rust
//! use complexity_core::features::lexical::Highlighter;
//! use complexity_core::features::report::AnalysisReport;
//!
//! let report = AnalysisReport::parse("Time Complexity: O(n)\nRating: 8/10\n");
//! assert_eq!(report.rating, Some(8));
//! let html = report.render_html(&Highlighter::new());
//! assert!(html.contains("complexity-linear"));
//! ```

pub mod model;
pub mod parser;
pub mod render;

pub use model::{AnalysisReport, CodeBlock, ReportField};
pub use parser::{parse_rating, FENCE, MAX_RATING};
