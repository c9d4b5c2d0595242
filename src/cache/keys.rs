//! Composite keys used by the remote cache.
//!
//! Each cached field of a paste lives under its own key: the paste id
//! followed by a fixed suffix. No prefix or namespace is added.

/// Suffix of the metadata key.
pub const META_SUFFIX: &str = "__meta";
/// Suffix of the rendered content key.
pub const RENDERED_SUFFIX: &str = "__html";
/// Suffix of the raw content key.
pub const RAW_SUFFIX: &str = "__raw";

/// Key holding the JSON metadata of a paste.
pub fn meta_key(paste_id: &str) -> String {
    format!("{paste_id}{META_SUFFIX}")
}

/// Key holding the rendered content of a paste.
pub fn rendered_key(paste_id: &str) -> String {
    format!("{paste_id}{RENDERED_SUFFIX}")
}

/// Key holding the raw content of a paste.
pub fn raw_key(paste_id: &str) -> String {
    format!("{paste_id}{RAW_SUFFIX}")
}
