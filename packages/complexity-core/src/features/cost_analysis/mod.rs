//! Cost Analysis
//!
//! Estimates the time complexity of a source snippet from its text alone:
//! no parse tree, no execution. A fixed, ordered list of rules looks for
//! recognizable idioms (binary search, self-recursion, sort calls,
//! membership tests in loops) and otherwise falls back to loop nesting
//! depth measured by indentation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - ComplexityClass (O(n), O(n²), ...)   │
//! │  - ComplexityLabel / ColorBand          │
//! │  - Estimate, RuleId                     │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - rules (ordered predicate list)       │
//! │  - NestingScanner (indentation stack)   │
//! │  - CostAnalyzer (cache + batch)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use complexity_core::features::cost_analysis::classify;
//!
//! let code = "for i in range(n):\n    for j in range(n):\n        total += i * j\n";
//! assert_eq!(classify(code), "O(n²)");
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{CostAnalysisUseCase, CostAnalysisUseCaseImpl};

// Re-exports for convenience
pub use domain::{ColorBand, ComplexityClass, ComplexityLabel, Estimate, RuleId};

pub use infrastructure::{classify, classify_class, estimate, CacheStats, CostAnalyzer};
