//! Cache Module
//!
//! Paste cache interface and its backends: no-op, bounded in-process LRU,
//! and a remote key-value store (Redis).

mod backend;
mod entry;
pub mod keys;
mod local;
mod lru;
mod noop;
#[cfg(feature = "redis-backend")]
mod redis;
mod remote;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use backend::{build_cache, PasteCache, SharedCache};
pub use entry::CacheEntry;
pub use local::{LocalCache, LocalStore};
pub use lru::RecencyTracker;
pub use noop::NoopCache;
#[cfg(feature = "redis-backend")]
pub use self::redis::RedisConnector;
pub use remote::{RemoteCache, RemoteConnection, RemoteConnector};
pub use stats::CacheStats;
