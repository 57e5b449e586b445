//! Response cache with single-flight semantics.
//!
//! Sits in front of the fetch+extract pipeline, keyed by the externally
//! visible request path. Concurrent callers for the same missing or
//! expired key collapse into one underlying compute; latecomers wait for
//! and receive the in-flight result. Failed computes are handed to all
//! waiters but never stored, so the next attempt recomputes.
//!
//! Departure boards are time-sensitive and never go through this cache.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use serde_json::Value;

use crate::scrape::ScrapeError;

/// Configuration for the response cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Freshness window: entries older than this are recomputed.
    pub ttl: Duration,

    /// Maximum number of cached entries. The real key space is bounded
    /// by the operator's finite set of stations and lines.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
            max_capacity: 4096,
        }
    }
}

/// Cache of serialized records, keyed by request path.
pub struct ResponseCache {
    inner: MokaCache<String, Arc<Value>>,
}

impl ResponseCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let inner = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        Self { inner }
    }

    /// Return the cached value for `key` if fresh, otherwise run
    /// `compute`, store its result under `key` and return it.
    ///
    /// At most one compute is in flight per key; an error is returned to
    /// every waiter without being stored.
    pub async fn get_or_compute<F>(&self, key: String, compute: F) -> Result<Arc<Value>, Arc<ScrapeError>>
    where
        F: Future<Output = Result<Arc<Value>, ScrapeError>>,
    {
        self.inner.try_get_with(key, compute).await
    }

    /// Number of live entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
