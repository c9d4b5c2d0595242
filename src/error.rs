//! Error types for the paste cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for every cache backend and the host surface.
///
/// A cache miss is never an error; getters return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A backend needs a client library that was not compiled in
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// Configuration rejected at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Networked backend used outside of its serving period
    #[error("Remote cache is not connected")]
    NotConnected,

    /// External key-value service failure
    #[error("Remote cache error: {0}")]
    Remote(String),

    /// Cached value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cached rendered value is not valid UTF-8
    #[error("Invalid UTF-8 in cached value: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Requested resource is not available
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "redis-backend")]
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Remote(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::NotConnected | CacheError::Remote(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the paste cache.
pub type Result<T> = std::result::Result<T, CacheError>;
