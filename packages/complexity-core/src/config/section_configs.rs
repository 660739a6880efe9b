//! Per-section configuration
//!
//! Each section has preset defaults, builder-style setters and range
//! validation.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Cache
// ═══════════════════════════════════════════════════════════════════════════

/// Estimate cache keyed by snippet text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Enable the cache
    pub enabled: bool,

    /// Maximum cached snippets (1..=100000)
    pub capacity: usize,
}

impl CacheConfig {
    pub const MAX_CAPACITY: usize = 100_000;

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Interactive => Self {
                enabled: true,
                capacity: 512,
            },
            Preset::Batch => Self {
                enabled: true,
                capacity: 4096,
            },
            Preset::Minimal => Self {
                enabled: false,
                capacity: 1,
            },
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Validatable for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity < 1 || self.capacity > Self::MAX_CAPACITY {
            return Err(ConfigError::range_with_hint(
                "cache.capacity",
                self.capacity,
                1,
                Self::MAX_CAPACITY,
                "Cache must hold at least one snippet",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "CacheConfig"
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Highlight
// ═══════════════════════════════════════════════════════════════════════════

/// Markup settings for the highlighter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HighlightConfig {
    /// Prepended to every category class name (`tok-` → `tok-keyword`)
    #[serde(default)]
    pub class_prefix: String,
}

impl HighlightConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self::default()
    }

    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

impl Validatable for HighlightConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Emitted inside a quoted HTML attribute
        if let Some(bad) = self
            .class_prefix
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ConfigError::invalid_value(
                "highlight.class_prefix",
                format!("character {:?} is not allowed in a CSS class name", bad),
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "HighlightConfig"
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Batch
// ═══════════════════════════════════════════════════════════════════════════

/// Batch estimation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Use the rayon pool for batches
    pub parallel: bool,

    /// Smallest batch worth splitting across threads (>= 1)
    pub min_parallel_batch: usize,
}

impl BatchConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Interactive => Self {
                parallel: false,
                min_parallel_batch: 64,
            },
            Preset::Batch => Self {
                parallel: true,
                min_parallel_batch: 32,
            },
            Preset::Minimal => Self {
                parallel: false,
                min_parallel_batch: 1,
            },
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_parallel_batch(mut self, size: usize) -> Self {
        self.min_parallel_batch = size;
        self
    }

    /// Should a batch of `len` snippets go to the thread pool?
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.min_parallel_batch
    }
}

impl Validatable for BatchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_parallel_batch < 1 {
            return Err(ConfigError::range_with_hint(
                "batch.min_parallel_batch",
                self.min_parallel_batch,
                1,
                usize::MAX,
                "Batch threshold must be positive",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "BatchConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for preset in [Preset::Interactive, Preset::Batch, Preset::Minimal] {
            assert!(CacheConfig::from_preset(preset).validate().is_ok());
            assert!(HighlightConfig::from_preset(preset).validate().is_ok());
            assert!(BatchConfig::from_preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_cache_capacity_range() {
        let cache = CacheConfig::from_preset(Preset::Batch).capacity(0);
        assert!(matches!(cache.validate(), Err(ConfigError::Range { .. })));

        let cache = CacheConfig::from_preset(Preset::Batch).capacity(100_001);
        assert!(cache.validate().is_err());

        let cache = CacheConfig::from_preset(Preset::Batch).capacity(100_000);
        assert!(cache.validate().is_ok());
    }

    #[test]
    fn test_class_prefix_alphabet() {
        assert!(HighlightConfig::default()
            .class_prefix("tok-")
            .validate()
            .is_ok());
        assert!(HighlightConfig::default()
            .class_prefix("a\" onclick=\"x")
            .validate()
            .is_err());
        assert!(HighlightConfig::default()
            .class_prefix("with space")
            .validate()
            .is_err());
    }

    #[test]
    fn test_batch_threshold() {
        let batch = BatchConfig::from_preset(Preset::Batch);
        assert!(!batch.use_parallel(31));
        assert!(batch.use_parallel(32));
        assert!(!BatchConfig::from_preset(Preset::Minimal).use_parallel(1000));
        assert!(BatchConfig::from_preset(Preset::Batch)
            .min_parallel_batch(0)
            .validate()
            .is_err());
    }
}
