//! Cache Backend Interface
//!
//! The capability set every paste cache backend implements, and the
//! startup-time selection of one backend from configuration.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::cache::{CacheEntry, CacheStats, LocalCache, NoopCache};
use crate::config::{CacheBackendKind, CacheConfig};
use crate::error::Result;
use crate::models::PasteMeta;

/// A cache backend shared by every request handler.
pub type SharedCache = Arc<dyn PasteCache>;

// == Paste Cache ==
/// Cache placed in front of the authoritative paste store.
///
/// Callers treat the cache as an optional accelerator: a `None` from a getter
/// or any propagated error means "go to the paste store".
#[async_trait]
pub trait PasteCache: Send + Sync + Debug {
    /// Creates or updates the fields present in `entry`.
    ///
    /// Omitted fields are carried forward from the currently cached entry
    /// where the backend can read it cheaply; otherwise they are left as-is.
    async fn push_paste_all(&self, paste_id: &str, entry: CacheEntry) -> Result<()>;

    /// Creates or updates only the cached metadata of a paste.
    async fn push_paste_meta(&self, paste_id: &str, meta: PasteMeta) -> Result<()> {
        self.push_paste_all(paste_id, CacheEntry::new().with_meta(meta))
            .await
    }

    /// Cached metadata, if any.
    async fn get_paste_meta(&self, paste_id: &str) -> Result<Option<PasteMeta>>;

    /// Cached rendered content, if any.
    async fn get_paste_rendered(&self, paste_id: &str) -> Result<Option<String>>;

    /// Cached raw content, if any.
    async fn get_paste_raw(&self, paste_id: &str) -> Result<Option<Vec<u8>>>;

    /// Acquires external resources when the host starts serving.
    async fn open(&self) -> Result<()> {
        Ok(())
    }

    /// Releases external resources when the host stops serving.
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Short name of the backend, as used in configuration.
    fn backend_name(&self) -> &'static str;

    /// Usage counters, for backends that keep them.
    async fn stats(&self) -> Option<CacheStats> {
        None
    }
}

// == Backend Selection ==
/// Builds the backend selected by `config`.
///
/// Fails with [`CacheError::MissingDependency`](crate::error::CacheError::MissingDependency) when the remote backend is
/// requested but Redis support was not compiled in.
pub fn build_cache(config: &CacheConfig) -> Result<SharedCache> {
    let cache: SharedCache = match config.backend {
        CacheBackendKind::None => {
            info!("Paste caching disabled");
            Arc::new(NoopCache::new())
        }
        CacheBackendKind::Local => {
            info!(capacity = config.local_capacity, "Initializing local paste cache");
            Arc::new(LocalCache::new(config.local_capacity)?)
        }
        CacheBackendKind::Remote => build_remote(config)?,
    };

    Ok(cache)
}

#[cfg(feature = "redis-backend")]
fn build_remote(config: &CacheConfig) -> Result<SharedCache> {
    use crate::cache::{RedisConnector, RemoteCache};

    info!("Initializing remote paste cache");
    let connector = RedisConnector::new(&config.redis_url)?;
    Ok(Arc::new(RemoteCache::new(connector)))
}

#[cfg(not(feature = "redis-backend"))]
fn build_remote(_config: &CacheConfig) -> Result<SharedCache> {
    Err(crate::error::CacheError::MissingDependency(
        "the remote cache requires the `redis-backend` feature".to_string(),
    ))
}
