//! Infrastructure layer for cost analysis

pub mod analyzer;
pub mod cache;
pub mod nesting;
pub mod rules;

pub use analyzer::{classify, classify_class, estimate, CostAnalyzer};
pub use cache::{CacheStats, EstimateCache};
pub use nesting::NestingScanner;
pub use rules::{Rule, Snippet, RULES};
