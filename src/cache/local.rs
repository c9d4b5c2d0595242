//! Local Cache Module
//!
//! Bounded in-process paste cache with least-recently-used eviction.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::stats::UsageCounters;
use crate::cache::{CacheEntry, CacheStats, PasteCache, RecencyTracker};
use crate::error::{CacheError, Result};
use crate::models::PasteMeta;

// == Local Store ==
/// Paste entries plus their access order, bounded to `capacity` entries.
///
/// Every successful read or write of an id makes it the most recently used.
#[derive(Debug)]
pub struct LocalStore {
    entries: HashMap<String, CacheEntry>,
    recency: RecencyTracker,
    counters: UsageCounters,
    capacity: usize,
}

impl LocalStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` pastes.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "local cache capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            counters: UsageCounters::default(),
            capacity,
        })
    }

    // == Push ==
    /// Writes the fields present in `entry`, keeping cached values for omitted ones.
    ///
    /// The previous entry is looked up without promotion, so the id ends up
    /// most recently used exactly once.
    pub fn push(&mut self, paste_id: &str, entry: CacheEntry) {
        let merged = entry.merged_over(self.entries.get(paste_id));
        self.entries.insert(paste_id.to_string(), merged);
        self.recency.promote(paste_id);
        self.evict_overflow();
    }

    // == Get ==
    /// Returns the cached entry for `paste_id`, promoting it on a hit.
    pub fn get(&mut self, paste_id: &str) -> Option<&CacheEntry> {
        let found = self.entries.contains_key(paste_id);
        self.counters.lookup(found);
        if found {
            self.recency.promote(paste_id);
        }
        self.entries.get(paste_id)
    }

    /// Returns the cached entry without touching recency or statistics.
    pub fn peek(&self, paste_id: &str) -> Option<&CacheEntry> {
        self.entries.get(paste_id)
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.recency.pop_least_recent() else {
                break;
            };
            self.entries.remove(&oldest);
            self.counters.evicted();
            debug!(paste_id = %oldest, "Evicted least recently used paste from cache");
        }
    }

    /// Paste ids from most to least recently used.
    pub fn recency_order(&self) -> Vec<String> {
        self.recency.iter().map(str::to_string).collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len(), self.capacity())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Local Cache ==
/// [`PasteCache`] backed by a [`LocalStore`].
///
/// The lock is held for the whole of each operation, so read-and-promote and
/// merge-write-evict are atomic with respect to other tasks.
#[derive(Debug)]
pub struct LocalCache {
    store: Mutex<LocalStore>,
}

impl LocalCache {
    /// Creates a local cache holding at most `capacity` pastes.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: Mutex::new(LocalStore::new(capacity)?),
        })
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Paste ids from most to least recently used.
    pub async fn recency_order(&self) -> Vec<String> {
        self.store.lock().await.recency_order()
    }
}

#[async_trait]
impl PasteCache for LocalCache {
    async fn push_paste_all(&self, paste_id: &str, entry: CacheEntry) -> Result<()> {
        self.store.lock().await.push(paste_id, entry);
        Ok(())
    }

    async fn get_paste_meta(&self, paste_id: &str) -> Result<Option<PasteMeta>> {
        let mut store = self.store.lock().await;
        Ok(store.get(paste_id).and_then(|entry| entry.meta.clone()))
    }

    async fn get_paste_rendered(&self, paste_id: &str) -> Result<Option<String>> {
        let mut store = self.store.lock().await;
        Ok(store.get(paste_id).and_then(|entry| entry.rendered.clone()))
    }

    async fn get_paste_raw(&self, paste_id: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.lock().await;
        Ok(store.get(paste_id).and_then(|entry| entry.raw.clone()))
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }

    async fn stats(&self) -> Option<CacheStats> {
        Some(self.store.lock().await.stats())
    }
}
