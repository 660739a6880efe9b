//! Configuration validation
//!
//! Every config section implements [`Validatable`]; the top-level
//! [`EstimatorConfig`](super::EstimatorConfig) validates each section in turn.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use complexity_core::config::{CacheConfig, Preset, Validatable};
///
/// let cache = CacheConfig::from_preset(Preset::Batch).capacity(0);
/// assert!(cache.validate().is_err());
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}
