//! Classification cache.
//!
//! Memoizes the tag per capability signature, not per value. The key space is
//! bounded by the vocabulary so entries are never evicted.

use parking_lot::RwLock;
use polyglot_core::{FastHashMap, ForeignTag, Signature, fast_map_new};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

pub struct ClassificationCache {
    entries: RwLock<FastHashMap<Signature, ForeignTag>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(fast_map_new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Process-wide cache shared by every default classifier.
    pub fn global() -> Arc<ClassificationCache> {
        static GLOBAL: OnceLock<Arc<ClassificationCache>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(ClassificationCache::new()))
            .clone()
    }

    pub fn lookup(&self, signature: Signature) -> Option<ForeignTag> {
        let found = self.entries.read().get(&signature).copied();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Record `tag` for `signature`.
    ///
    /// Racing callers compute the same tag for the same signature, so the
    /// first stored value is kept and later stores are no-ops.
    pub fn store(&self, signature: Signature, tag: ForeignTag) {
        let mut entries = self.entries.write();
        let stored = *entries.entry(signature).or_insert(tag);
        debug_assert_eq!(stored, tag, "cache disagreement for {signature}");
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for ClassificationCache {
    fn default() -> Self {
        Self::new()
    }
}
