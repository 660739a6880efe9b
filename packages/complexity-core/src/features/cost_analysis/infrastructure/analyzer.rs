//! Cost Analyzer
//!
//! Main entry point for heuristic cost estimation.
//!
//! Algorithm:
//! 1. Scan the snippet once per pattern (def header, loop keywords, nesting)
//! 2. Run the ordered rule list, first match wins
//! 3. Fall back to O(n) when a loop keyword exists but nothing matched
//!
//! Every step is a bounded scan of the input, so estimation is linear in
//! the snippet length and never fails.

use crate::config::{BatchConfig, EstimatorConfig};
use crate::features::cost_analysis::domain::{ComplexityClass, Estimate};
use crate::features::cost_analysis::infrastructure::cache::{CacheStats, EstimateCache};
use crate::features::cost_analysis::infrastructure::rules::{evaluate, Snippet};
use parking_lot::Mutex;
use rayon::prelude::*;

/// Estimate the complexity of a snippet (uncached)
pub fn estimate(code: &str) -> Estimate {
    let snippet = Snippet::scan(code);
    let (complexity, rule) = evaluate(&snippet);

    tracing::debug!(
        rule = rule.as_str(),
        max_depth = snippet.max_depth,
        "Estimated {}",
        complexity.as_str()
    );

    Estimate {
        complexity,
        rule,
        max_depth: snippet.max_depth,
    }
}

/// Classify a snippet into a Big-O class
pub fn classify_class(code: &str) -> ComplexityClass {
    estimate(code).complexity
}

/// Classify a snippet into a Big-O label such as `O(n²)`
pub fn classify(code: &str) -> String {
    classify_class(code).as_str().to_string()
}

/// Cost Analyzer
///
/// Responsibilities:
/// - Cache estimates by exact snippet text
/// - Fan batches out over the rayon pool
///
/// NOT Responsible For:
/// - The classification itself ([`estimate`])
///
/// The cache sits behind a mutex so one analyzer can be shared across
/// threads.
pub struct CostAnalyzer {
    cache: Option<Mutex<EstimateCache>>,
    batch: BatchConfig,
}

impl CostAnalyzer {
    /// Create new cost analyzer
    pub fn new(config: &EstimatorConfig) -> Self {
        tracing::info!(
            "cost_analyzer_initialized (cache={}, capacity={}, parallel={})",
            config.cache.enabled,
            config.cache.capacity,
            config.batch.parallel
        );

        Self {
            cache: config
                .cache
                .enabled
                .then(|| Mutex::new(EstimateCache::new(config.cache.capacity))),
            batch: config.batch.clone(),
        }
    }

    /// Analyze one snippet
    pub fn analyze(&self, code: &str) -> Estimate {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lock().get(code) {
                tracing::debug!("Cost cache hit ({} bytes)", code.len());
                return hit;
            }
        }

        let result = estimate(code);

        if let Some(cache) = &self.cache {
            cache.lock().put(code, result);
        }

        result
    }

    /// Analyze independent snippets, preserving input order
    pub fn analyze_batch(&self, snippets: &[&str]) -> Vec<Estimate> {
        if self.batch.use_parallel(snippets.len()) {
            tracing::debug!("Parallel batch of {} snippets", snippets.len());
            snippets.par_iter().map(|code| self.analyze(code)).collect()
        } else {
            snippets.iter().map(|code| self.analyze(code)).collect()
        }
    }

    /// Cache counters, or `None` when caching is disabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| cache.lock().stats())
    }

    /// Invalidate cache, returning the number of dropped entries
    pub fn invalidate_cache(&self) -> usize {
        match &self.cache {
            Some(cache) => {
                let mut cache = cache.lock();
                let count = cache.len();
                cache.clear();
                count
            }
            None => 0,
        }
    }
}

impl Default for CostAnalyzer {
    fn default() -> Self {
        Self::new(&EstimatorConfig::default())
    }
}
