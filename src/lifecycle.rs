//! Serving Lifecycle
//!
//! Ties the cache's external resources to the host's serving period.

use std::future::Future;
use std::panic;

use tracing::{error, info};

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};

/// Opens `cache`, drives `serve` to completion, then closes `cache`.
///
/// The cache is closed on every exit path of the serving task, including a
/// panic, which is resumed once the connection has been released. `serve`
/// runs on its own task so a panic inside it cannot skip the close.
///
/// Only a failing `open` keeps `serve` from running. The remote backend opens
/// even while its service is unreachable and reconnects on use.
///
/// # Example
/// ```ignore
/// let cache = build_cache(&config.cache)?;
/// run_while_serving(cache.clone(), async move {
///     axum::serve(listener, app).await
/// })
/// .await??;
/// ```
pub async fn run_while_serving<F>(cache: SharedCache, serve: F) -> Result<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    cache.open().await?;
    info!(backend = cache.backend_name(), "Cache ready, serving");

    let outcome = tokio::spawn(serve).await;

    if let Err(e) = cache.close().await {
        error!(error = %e, "Failed to release cache resources");
    }
    info!(backend = cache.backend_name(), "Cache released");

    match outcome {
        Ok(output) => Ok(output),
        Err(join_err) if join_err.is_panic() => panic::resume_unwind(join_err.into_panic()),
        Err(join_err) => Err(CacheError::Internal(format!(
            "serving task did not complete: {join_err}"
        ))),
    }
}
