//! API Routes
//!
//! Configures the Axum router for the host's operational endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, stats_handler, AppState};

/// Creates the router.
///
/// # Endpoints
/// - `GET /health` - Health check, names the active cache backend
/// - `GET /stats` - Cache statistics (local backend only)
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cache::{LocalCache, NoopCache};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router(AppState::new(Arc::new(NoopCache::new())));

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint_local() {
        let app = create_router(AppState::new(Arc::new(LocalCache::new(5).unwrap())));

        let response = app.oneshot(get("/stats")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint_noop_not_found() {
        let app = create_router(AppState::new(Arc::new(NoopCache::new())));

        let response = app.oneshot(get("/stats")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
