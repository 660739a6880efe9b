//! Top-level estimator configuration
//!
//! Built from a [`Preset`], adjusted with closure overrides, or loaded from
//! a versioned YAML file.

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::section_configs::{BatchConfig, CacheConfig, HighlightConfig};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub preset: Preset,
    pub cache: CacheConfig,
    pub highlight: HighlightConfig,
    pub batch: BatchConfig,
}

impl EstimatorConfig {
    /// Complete defaults for a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            cache: CacheConfig::from_preset(preset),
            highlight: HighlightConfig::from_preset(preset),
            batch: BatchConfig::from_preset(preset),
        }
    }

    /// Override the cache section
    pub fn cache(mut self, f: impl FnOnce(CacheConfig) -> CacheConfig) -> Self {
        self.cache = f(self.cache);
        self
    }

    /// Override the highlight section
    pub fn highlight(mut self, f: impl FnOnce(HighlightConfig) -> HighlightConfig) -> Self {
        self.highlight = f(self.highlight);
        self
    }

    /// Override the batch section
    pub fn batch(mut self, f: impl FnOnce(BatchConfig) -> BatchConfig) -> Self {
        self.batch = f(self.batch);
        self
    }

    /// Validate and return the config
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!("Loaded estimator config from {}", path.display());
        Ok(config)
    }

    /// Parse YAML schema v1
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            if let Some(cache) = overrides.cache {
                config.cache = cache;
            }
            if let Some(highlight) = overrides.highlight {
                config.highlight = highlight;
            }
            if let Some(batch) = overrides.batch {
                config.batch = batch;
            }
        }

        config.build()
    }

    /// Export as YAML schema v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                cache: Some(self.cache.clone()),
                highlight: Some(self.highlight.clone()),
                batch: Some(self.batch.clone()),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for EstimatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.cache.validate()?;
        self.highlight.validate()?;
        self.batch.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "EstimatorConfig"
    }
}
