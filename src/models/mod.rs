//! Data models
//!
//! Paste metadata cached by every backend, and the DTOs served by the
//! host's operational endpoints.

pub mod paste;
pub mod responses;

// Re-export commonly used types
pub use paste::PasteMeta;
pub use responses::{HealthResponse, StatsResponse};
