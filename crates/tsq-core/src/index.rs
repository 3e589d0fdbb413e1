use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::node_types::{AnnotatedNode, SchemaError, index_node_types};

pub const DEFAULT_CAPACITY: usize = 10;

/// Shared descriptor list, or the structural failure for that text.
///
/// The `Arc` allocation doubles as an identity token: two lookups that hit
/// the same cache entry return pointer-equal arrays.
pub type IndexResult = Result<Arc<[AnnotatedNode]>, SchemaError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Schema index keyed by exact document text.
///
/// An edited document is a different key, so entries are never invalidated,
/// only evicted in least-recently-used order.
pub struct SchemaIndex {
    cache: LruCache<String, IndexResult>,
    stats: CacheStats,
}

impl Default for SchemaIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaIndex {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacity below one is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::MIN.saturating_add(capacity.saturating_sub(1));
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached result for `text`, computing and inserting it on a miss.
    pub fn get_or_compute(&mut self, text: &str) -> IndexResult {
        if let Some(hit) = self.cache.get(text).cloned() {
            self.stats.hits += 1;
            return hit;
        }

        self.stats.misses += 1;
        let result = index_node_types(text).map(Arc::from);
        if let Err(err) = &result {
            tracing::debug!(%err, "node-types index failed");
        }
        if let Some((evicted, _)) = self.cache.push(text.to_owned(), result.clone()) {
            tracing::trace!(len = evicted.len(), "evicted node-types index entry");
        }
        result
    }

    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(text)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = CacheStats::default();
    }
}
