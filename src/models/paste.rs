//! Paste metadata model
//!
//! The record the paste store keeps next to each paste, cached as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing a stored paste.
///
/// The JSON form of this struct is the canonical value stored under the
/// `<paste_id>__meta` key of the remote cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteMeta {
    /// Public paste identifier
    pub paste_id: String,
    /// When the paste was created (UTC)
    pub creation_dt: DateTime<Utc>,
    /// When the paste stops being served (UTC), None = never
    #[serde(default)]
    pub expire_dt: Option<DateTime<Utc>>,
}

impl PasteMeta {
    /// Creates metadata for a paste created now.
    pub fn new(paste_id: impl Into<String>, expire_dt: Option<DateTime<Utc>>) -> Self {
        Self {
            paste_id: paste_id.into(),
            creation_dt: Utc::now(),
            expire_dt,
        }
    }

    /// Whether the paste has passed its expiry time.
    ///
    /// Provided for callers; no cache backend evaluates expiry.
    pub fn is_expired(&self) -> bool {
        self.expire_dt.is_some_and(|expires| Utc::now() >= expires)
    }
}
