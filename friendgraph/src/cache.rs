use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::store::VertexId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoizes materialized neighbor rows keyed by vertex id.
///
/// The matrix store computes a neighbor row by scanning a full table row;
/// since the table is immutable after load, the scan result can be reused
/// for the lifetime of the store. Interior locking keeps the store safe to
/// query from many threads at once.
#[derive(Default)]
pub struct NeighborCache {
    inner: RwLock<AHashMap<VertexId, Vec<VertexId>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: VertexId) -> Option<Vec<VertexId>> {
        if let Some(value) = self.inner.read().get(&key).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Some(value)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn insert(&self, key: VertexId, value: Vec<VertexId>) {
        self.inner.write().insert(key, value);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.inner.read().len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
