//! Cache Entry Module
//!
//! Defines the per-paste record shared by every backend.

use crate::models::PasteMeta;

// == Cache Entry ==
/// Everything currently cached about one paste.
///
/// Each field is independently optional: `None` means "not known to be
/// cached", while `Some` of an empty value is a cached empty value. The same
/// type describes a write, where `None` means the field was omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheEntry {
    /// Paste metadata
    pub meta: Option<PasteMeta>,
    /// Content rendered for display
    pub rendered: Option<String>,
    /// Unprocessed paste content
    pub raw: Option<Vec<u8>>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metadata field.
    pub fn with_meta(mut self, meta: PasteMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets the rendered field.
    pub fn with_rendered(mut self, rendered: impl Into<String>) -> Self {
        self.rendered = Some(rendered.into());
        self
    }

    /// Sets the raw field.
    pub fn with_raw(mut self, raw: impl Into<Vec<u8>>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    // == Is Empty ==
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.meta.is_none() && self.rendered.is_none() && self.raw.is_none()
    }

    // == Merge ==
    /// Fills every omitted field of this write from the previously cached entry.
    ///
    /// Fields present in `self` always win, so a partial write never discards
    /// what was cached before.
    pub fn merged_over(self, previous: Option<&CacheEntry>) -> CacheEntry {
        let Some(previous) = previous else {
            return self;
        };

        CacheEntry {
            meta: self.meta.or_else(|| previous.meta.clone()),
            rendered: self.rendered.or_else(|| previous.rendered.clone()),
            raw: self.raw.or_else(|| previous.raw.clone()),
        }
    }
}
