//! Bodies of the host's operational endpoints.

use serde::Serialize;

use crate::cache::CacheStats;

/// Body of `GET /stats`: the cache snapshot plus derived figures.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub backend: &'static str,
    #[serde(flatten)]
    pub stats: CacheStats,
    /// `null` until the first lookup
    pub hit_rate: Option<f64>,
}

impl StatsResponse {
    pub fn new(backend: &'static str, stats: CacheStats) -> Self {
        Self {
            backend,
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    /// Active cache backend, as named in `CACHE_BACKEND`
    pub backend: String,
}

impl HealthResponse {
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            backend: backend.into(),
        }
    }
}
