/*
 * Complexity Core - Offline Big-O Estimation
 *
 * Feature-First Architecture:
 * - config/    : Presets, section overrides, YAML
 * - features/  : Vertical slices (cost_analysis, lexical, report)
 * - errors     : Crate error type
 *
 * Estimation and highlighting are pure text scans: no parser, no
 * execution, no network.
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (presets, overrides, YAML)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Convenience re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, EstimatorConfig, Preset};
pub use errors::{EstimatorError, Result};
pub use features::cost_analysis::{
    classify, classify_class, estimate, ColorBand, ComplexityClass, ComplexityLabel,
    CostAnalyzer, Estimate, RuleId,
};
pub use features::lexical::{highlight, highlight_tokens, Highlighter, Token, TokenKind};
pub use features::report::AnalysisReport;
