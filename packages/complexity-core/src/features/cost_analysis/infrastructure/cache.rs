//! LRU cache for estimates
//!
//! Keyed by the exact snippet text: two snippets differing in a single
//! whitespace character are different entries.

use crate::features::cost_analysis::domain::Estimate;
use lru::LruCache;
use std::num::NonZeroUsize;

pub struct EstimateCache {
    cache: LruCache<String, Estimate>,

    /// Cache hits counter
    hits: usize,

    /// Cache misses counter
    misses: usize,
}

impl EstimateCache {
    /// Create a new cache holding at most `max_size` snippets (at least one)
    pub fn new(max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a snippet, updating hit/miss statistics
    pub fn get(&mut self, code: &str) -> Option<Estimate> {
        match self.cache.get(code) {
            Some(estimate) => {
                self.hits += 1;
                Some(*estimate)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, code: &str, estimate: Estimate) {
        self.cache.put(code.to_string(), estimate);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    /// Cache hit rate (0.0-1.0)
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}
