//! API Handlers
//!
//! Operational endpoints of the host process.

use axum::{extract::State, Json};

use crate::cache::{build_cache, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The paste routes of the surrounding service reach the cache through the
/// same `cache` handle.
#[derive(Clone)]
pub struct AppState {
    /// Backend selected at startup
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an already-built cache.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Builds the configured cache backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(build_cache(&config.cache)?))
    }
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.backend_name()))
}

/// Handler for GET /stats
///
/// Only backends that keep usage counters can answer; others yield 404.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.cache.stats().await.ok_or_else(|| {
        CacheError::NotFound(format!(
            "the '{}' cache backend does not keep statistics",
            state.cache.backend_name()
        ))
    })?;

    Ok(Json(StatsResponse::new(state.cache.backend_name(), stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cache::{CacheEntry, LocalCache, NoopCache};

    #[tokio::test]
    async fn test_health_handler_reports_backend() {
        let state = AppState::new(Arc::new(NoopCache::new()));

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.backend, "none");
    }

    #[tokio::test]
    async fn test_stats_handler_local_backend() {
        let state = AppState::new(Arc::new(LocalCache::new(5).unwrap()));
        state
            .cache
            .push_paste_all("abc", CacheEntry::new().with_rendered("x"))
            .await
            .unwrap();
        state.cache.get_paste_rendered("abc").await.unwrap();
        state.cache.get_paste_rendered("zzz").await.unwrap();

        let response = stats_handler(State(state)).await.unwrap();
        assert_eq!(response.backend, "local");
        assert_eq!((response.stats.hits, response.stats.misses), (1, 1));
        assert_eq!(response.stats.entries, 1);
        assert_eq!(response.stats.capacity, 5);
        assert_eq!(response.hit_rate, Some(0.5));
    }

    #[tokio::test]
    async fn test_stats_handler_without_stats() {
        let state = AppState::new(Arc::new(NoopCache::new()));

        let result = stats_handler(State(state)).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert_eq!(state.cache.backend_name(), "local");
    }
}
