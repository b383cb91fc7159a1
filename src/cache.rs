//! Active page memoization.
//!
//! [`ActivePageCache`] keeps recently resolved pathnames in an LRU cache so
//! that re-rendering the same location hands back the very same
//! `Arc<ActivePage>`. Unmatched pathnames are cached too (as `None`).
//!
//! The cache does not know which navigation tree produced its entries; the
//! owner ([`ActivePageResolver`](crate::ActivePageResolver)) clears it
//! whenever the tree changes.
//!
//! Gated behind the `cache` feature, backed by the [`lru`] crate.
//!
//! ```
//! use dashboard_navigator::cache::ActivePageCache;
//!
//! let mut cache = ActivePageCache::new();
//! assert!(cache.get("/orders").is_none());
//! cache.insert("/orders".to_string(), None);
//! assert_eq!(cache.get("/orders"), Some(None));
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::active_page::ActivePage;
use crate::error::NavigationError;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that had to resolve
    pub misses: usize,
    /// Number of full invalidations (via [`ActivePageCache::clear`])
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before any lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from pathname to resolved active page.
#[derive(Debug)]
pub struct ActivePageCache {
    entries: LruCache<String, Option<Arc<ActivePage>>>,
    stats: CacheStats,
}

impl ActivePageCache {
    /// Default number of cached pathnames.
    pub const DEFAULT_CAPACITY: usize = crate::resolver::DEFAULT_CACHE_CAPACITY;

    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            ),
            stats: CacheStats::default(),
        }
    }

    /// Create a cache holding at most `capacity` pathnames.
    pub fn with_capacity(capacity: usize) -> Result<Self, NavigationError> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| NavigationError::InvalidConfig {
            message: "cache capacity must be non-zero".to_string(),
        })?;
        Ok(Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        })
    }

    /// Look up `pathname`.
    ///
    /// `None` is a miss; `Some(None)` is a cached "no active page".
    pub fn get(&mut self, pathname: &str) -> Option<Option<Arc<ActivePage>>> {
        if let Some(entry) = self.entries.get(pathname) {
            self.stats.hits += 1;
            trace_log!("Active page cache hit for '{}'", pathname);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Active page cache miss for '{}'", pathname);
            None
        }
    }

    pub fn insert(&mut self, pathname: String, page: Option<Arc<ActivePage>>) {
        self.entries.push(pathname, page);
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Active page cache cleared: {} entries removed ({} invalidations, hit rate {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for ActivePageCache {
    fn default() -> Self {
        Self::new()
    }
}
