//! Configuration System
//!
//! Two levels:
//! - Level 1: Preset - simple one-liner
//! - Level 2: Section override via closures or a YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use complexity_core::config::{EstimatorConfig, Preset};
//!
//! // Level 1: preset
//! let config = EstimatorConfig::preset(Preset::Batch).build()?;
//!
//! // Level 2: override one section
//! let config = EstimatorConfig::preset(Preset::Interactive)
//!     .cache(|c| c.capacity(2048))
//!     .build()?;
//!
//! // Level 2: YAML
//! let config = EstimatorConfig::from_yaml("complexity-lens.yaml")?;
//! ```

pub mod error;
pub mod estimator_config;
pub mod io;
pub mod preset;
pub mod section_configs;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use estimator_config::EstimatorConfig;
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use section_configs::{BatchConfig, CacheConfig, HighlightConfig};
pub use validation::Validatable;
