//! Paste Cache - pluggable cache layer for a paste-sharing service
//!
//! Provides a no-op, a bounded LRU and a Redis-backed cache behind one
//! interface, selected from configuration at startup.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;

pub use api::AppState;
pub use cache::{build_cache, CacheEntry, PasteCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use lifecycle::run_while_serving;
pub use models::PasteMeta;
