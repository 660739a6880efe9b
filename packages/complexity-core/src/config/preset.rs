//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Editor fallback: one snippet at a time, re-analyzed often
    ///
    /// - Cache: enabled, 512 snippets
    /// - Batch: sequential
    Interactive,

    /// Whole-file or CI sweeps over many snippets
    ///
    /// - Cache: enabled, 4096 snippets
    /// - Batch: rayon, from 32 snippets
    Batch,

    /// No cache, no thread pool
    Minimal,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "interactive" => Ok(Self::Interactive),
            "batch" => Ok(Self::Batch),
            "minimal" => Ok(Self::Minimal),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: interactive, batch, minimal",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Batch => "batch",
            Self::Minimal => "minimal",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Interactive
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
