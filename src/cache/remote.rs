//! Remote cache backend
//!
//! Stores each field of a paste under its own key in an external key-value
//! service. The connection exists only between [`PasteCache::open`] and
//! [`PasteCache::close`], which the host calls around its serving period.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::keys::{meta_key, raw_key, rendered_key};
use crate::cache::{CacheEntry, PasteCache};
use crate::error::{CacheError, Result};
use crate::models::PasteMeta;

// == Connection Traits ==
/// Live handle to the key-value service.
///
/// Handles are cheap to clone; each operation works on its own clone.
#[async_trait]
pub trait RemoteConnection: Clone + Send + Sync + Debug + 'static {
    /// Fetches the value stored under `key`.
    async fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores every pair in one batched command.
    async fn set_many(&mut self, items: &[(String, Vec<u8>)]) -> Result<()>;

    /// Releases the connection.
    async fn close(self) -> Result<()> {
        Ok(())
    }
}

/// Opens connections to the key-value service.
#[async_trait]
pub trait RemoteConnector: Send + Sync + Debug + 'static {
    type Connection: RemoteConnection;

    async fn connect(&self) -> Result<Self::Connection>;

    /// Connection target, safe to log.
    fn target(&self) -> &str;
}

// == Remote Cache ==
/// Connection state of a [`RemoteCache`].
#[derive(Debug)]
enum Slot<Conn> {
    /// Outside the serving period.
    Closed,
    /// Open, but the service could not be reached yet.
    Pending,
    Live(Conn),
}

/// [`PasteCache`] over a [`RemoteConnector`].
///
/// Partial writes only touch the keys of the fields supplied; omitted fields
/// are neither read back nor overwritten.
///
/// An unreachable service does not fail [`PasteCache::open`]: the cache stays
/// open and each operation retries the connection until one succeeds.
#[derive(Debug)]
pub struct RemoteCache<C: RemoteConnector> {
    connector: C,
    slot: RwLock<Slot<C::Connection>>,
}

impl<C: RemoteConnector> RemoteCache<C> {
    /// Creates an unconnected cache; call [`PasteCache::open`] before use.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            slot: RwLock::new(Slot::Closed),
        }
    }

    /// Whether a live connection is held.
    pub async fn is_connected(&self) -> bool {
        matches!(*self.slot.read().await, Slot::Live(_))
    }

    async fn connection(&self) -> Result<C::Connection> {
        {
            let slot = self.slot.read().await;
            match &*slot {
                Slot::Live(conn) => return Ok(conn.clone()),
                Slot::Closed => return Err(CacheError::NotConnected),
                Slot::Pending => {}
            }
        }

        // One reconnect attempt at a time; others wait here and reuse its result.
        let mut slot = self.slot.write().await;
        if let Slot::Live(conn) = &*slot {
            return Ok(conn.clone());
        }
        if matches!(*slot, Slot::Closed) {
            return Err(CacheError::NotConnected);
        }

        let conn = self.connector.connect().await.map_err(|err| {
            warn!(error = %err, "Remote cache still unreachable");
            err
        })?;
        info!(target_url = %self.connector.target(), "Connected to remote cache");
        *slot = Slot::Live(conn.clone());
        Ok(conn)
    }

    async fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        conn.get(key).await
    }
}

#[async_trait]
impl<C: RemoteConnector> PasteCache for RemoteCache<C> {
    async fn push_paste_all(&self, paste_id: &str, entry: CacheEntry) -> Result<()> {
        let mut items = Vec::with_capacity(3);

        if let Some(meta) = &entry.meta {
            items.push((meta_key(paste_id), serde_json::to_vec(meta)?));
        }
        if let Some(rendered) = entry.rendered {
            items.push((rendered_key(paste_id), rendered.into_bytes()));
        }
        if let Some(raw) = entry.raw {
            items.push((raw_key(paste_id), raw));
        }

        if items.is_empty() {
            debug!(paste_id, "Nothing to push to remote cache");
            return Ok(());
        }

        let mut conn = self.connection().await?;
        conn.set_many(&items).await
    }

    async fn get_paste_meta(&self, paste_id: &str) -> Result<Option<PasteMeta>> {
        match self.fetch(&meta_key(paste_id)).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_paste_rendered(&self, paste_id: &str) -> Result<Option<String>> {
        match self.fetch(&rendered_key(paste_id)).await? {
            Some(bytes) => Ok(Some(String::from_utf8(bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_paste_raw(&self, paste_id: &str) -> Result<Option<Vec<u8>>> {
        self.fetch(&raw_key(paste_id)).await
    }

    async fn open(&self) -> Result<()> {
        let mut slot = self.slot.write().await;
        if !matches!(*slot, Slot::Closed) {
            warn!("Remote cache already open");
            return Ok(());
        }

        info!(target_url = %self.connector.target(), "Connecting to remote cache");
        match self.connector.connect().await {
            Ok(conn) => {
                *slot = Slot::Live(conn);
                info!("Connected to remote cache");
            }
            Err(err) => {
                *slot = Slot::Pending;
                warn!(error = %err, "Remote cache unreachable, retrying on first use");
            }
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let previous = std::mem::replace(&mut *self.slot.write().await, Slot::Closed);
        let Slot::Live(conn) = previous else {
            return Ok(());
        };

        info!("Closing remote cache connection");
        conn.close().await?;
        info!("Closed remote cache connection");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}
