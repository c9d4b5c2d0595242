//! No-op cache backend, used when caching is disabled.

use async_trait::async_trait;

use crate::cache::{CacheEntry, PasteCache};
use crate::error::Result;
use crate::models::PasteMeta;

/// Backend that never caches anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasteCache for NoopCache {
    async fn push_paste_all(&self, _paste_id: &str, _entry: CacheEntry) -> Result<()> {
        Ok(())
    }

    async fn get_paste_meta(&self, _paste_id: &str) -> Result<Option<PasteMeta>> {
        Ok(None)
    }

    async fn get_paste_rendered(&self, _paste_id: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn get_paste_raw(&self, _paste_id: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn backend_name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_getters_stay_absent_after_writes() {
        let cache = NoopCache::new();
        let meta = PasteMeta::new("abc", None);

        cache
            .push_paste_all(
                "abc",
                CacheEntry::new()
                    .with_meta(meta.clone())
                    .with_rendered("<pre>x</pre>")
                    .with_raw(b"x".to_vec()),
            )
            .await
            .unwrap();
        cache.push_paste_meta("abc", meta).await.unwrap();

        assert!(cache.get_paste_meta("abc").await.unwrap().is_none());
        assert!(cache.get_paste_rendered("abc").await.unwrap().is_none());
        assert!(cache.get_paste_raw("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_noop_has_no_stats_and_trivial_lifecycle() {
        let cache = NoopCache::new();
        cache.open().await.unwrap();
        assert!(cache.stats().await.is_none());
        cache.close().await.unwrap();
    }
}
