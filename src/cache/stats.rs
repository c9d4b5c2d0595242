//! Usage counters of the local cache, and the snapshot handed out by `/stats`.

use serde::Serialize;

/// Running counters owned by a [`LocalStore`](crate::cache::LocalStore).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UsageCounters {
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl UsageCounters {
    /// Counts one read; `found` is whether the paste id was cached at all.
    pub(crate) fn lookup(&mut self, found: bool) {
        if found {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn evicted(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn snapshot(&self, entries: usize, capacity: usize) -> CacheStats {
        CacheStats {
            entries,
            capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of a bounded cache.
///
/// A hit is a read of a cached paste id, even when the requested field was
/// never pushed. Writes are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    /// Whole pastes dropped to stay within `capacity`
    pub evictions: u64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Share of lookups that found the paste; None before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        match self.lookups() {
            0 => None,
            lookups => Some(self.hits as f64 / lookups as f64),
        }
    }

    pub fn is_full(&self) -> bool {
        self.entries >= self.capacity
    }
}
