//! Configuration Module
//!
//! Loads cache backend selection and server settings from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Capacity of the local cache when none is configured.
pub const DEFAULT_LOCAL_CAPACITY: usize = 5;

/// Redis address used when none is configured.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

// == Backend Kind ==
/// Which cache backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackendKind {
    /// Caching disabled
    None,
    /// Bounded in-process LRU
    #[default]
    Local,
    /// External Redis service
    Remote,
}

impl CacheBackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheBackendKind::None => "none",
            CacheBackendKind::Local => "local",
            CacheBackendKind::Remote => "remote",
        }
    }
}

impl fmt::Display for CacheBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheBackendKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(CacheBackendKind::None),
            "local" => Ok(CacheBackendKind::Local),
            "remote" => Ok(CacheBackendKind::Remote),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown cache backend '{other}', expected one of: none, local, remote"
            ))),
        }
    }
}

// == Cache Config ==
/// Cache backend selection and tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Backend to build
    pub backend: CacheBackendKind,
    /// Maximum number of pastes held by the local backend
    pub local_capacity: usize,
    /// Connection URL of the remote backend
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::default(),
            local_capacity: DEFAULT_LOCAL_CAPACITY,
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

// == Config ==
/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache settings
    pub cache: CacheConfig,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BACKEND` - `none`, `local` or `remote` (default: local)
    /// - `CACHE_LOCAL_CAPACITY` - Local cache capacity, at least 1 (default: 5)
    /// - `CACHE_REDIS_URL` - Remote cache address (default: redis://127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CacheConfig::default();

        let backend = match lookup("CACHE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        let local_capacity = match lookup("CACHE_LOCAL_CAPACITY") {
            Some(value) => value.trim().parse().map_err(|_| {
                CacheError::InvalidConfig(format!(
                    "CACHE_LOCAL_CAPACITY must be a positive integer, got '{value}'"
                ))
            })?,
            None => defaults.local_capacity,
        };

        let config = Self {
            cache: CacheConfig {
                backend,
                local_capacity,
                redis_url: lookup("CACHE_REDIS_URL").unwrap_or(defaults.redis_url),
            },
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no backend can run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache.local_capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_LOCAL_CAPACITY must be at least 1".to_string(),
            ));
        }
        if self.cache.backend == CacheBackendKind::Remote && self.cache.redis_url.trim().is_empty()
        {
            return Err(CacheError::InvalidConfig(
                "CACHE_REDIS_URL must be set for the remote backend".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache.backend, CacheBackendKind::Local);
        assert_eq!(config.cache.local_capacity, 5);
        assert_eq!(config.cache.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_empty_lookup_matches_default() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_config_remote_backend() {
        let config = load(&[
            ("CACHE_BACKEND", "Remote"),
            ("CACHE_REDIS_URL", "redis://cache:6379/2"),
            ("SERVER_PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.cache.backend, CacheBackendKind::Remote);
        assert_eq!(config.cache.redis_url, "redis://cache:6379/2");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_config_unknown_backend_rejected() {
        let result = load(&[("CACHE_BACKEND", "memcached")]);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_zero_capacity_rejected() {
        let result = load(&[("CACHE_LOCAL_CAPACITY", "0")]);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_non_numeric_capacity_rejected() {
        let result = load(&[("CACHE_LOCAL_CAPACITY", "lots")]);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_empty_redis_url_rejected_for_remote() {
        let result = load(&[("CACHE_BACKEND", "remote"), ("CACHE_REDIS_URL", " ")]);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_backend_kind_display_roundtrip() {
        for kind in [
            CacheBackendKind::None,
            CacheBackendKind::Local,
            CacheBackendKind::Remote,
        ] {
            assert_eq!(kind.to_string().parse::<CacheBackendKind>().unwrap(), kind);
        }
    }
}
