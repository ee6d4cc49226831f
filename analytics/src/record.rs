//! The analytics record manager.
//!
//! [`AnalyticsDb`] owns the read-modify-write cycle for the single persisted
//! [`AnalyticsRecord`]: load-or-default, append through the pure policy in
//! [`model`](crate::model), persist. It holds no record state across calls;
//! the store is the sole durable owner.

use std::sync::Arc;

use bytes::Bytes;
use common::{create_storage, Clock, Storage, SystemClock};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{AnalyticsRecord, RequestEntry};

/// The fixed key under which the analytics record is stored.
pub const ANALYTICS_KEY: &str = "analytics";

/// Manager for the persisted analytics record.
///
/// # Consistency
///
/// [`append`](AnalyticsDb::append) is a read-then-write with no
/// compare-and-swap or locking: two appends that overlap in time may both
/// read the same prior record and each write back a version missing the
/// other's entry, so `totalRequests` can under-count under contention.
/// Last write wins at whole-record granularity. This is an accepted
/// tradeoff for an approximate request log; callers that need exact counts
/// need a store with an atomic read-modify-write primitive, which the
/// [`Storage`] contract deliberately does not require.
pub struct AnalyticsDb {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsDb {
    /// Opens an analytics database using the storage named in `config`.
    pub fn open(config: Config) -> Result<Self> {
        let storage = create_storage(&config.storage)?;
        Ok(Self::new(storage))
    }

    /// Creates an analytics database over an existing storage handle.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    /// Creates an analytics database with an injected clock, for tests.
    pub fn with_clock(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Loads the current analytics record.
    ///
    /// Never fails the caller: an absent key, an unparsable stored value,
    /// and a storage read failure all yield a fresh zero-value record
    /// stamped with the current time. A transient store outage is therefore
    /// indistinguishable from an empty log to readers; failures are logged
    /// and otherwise swallowed.
    pub async fn load(&self) -> AnalyticsRecord {
        let raw = match self.storage.get(ANALYTICS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return AnalyticsRecord::empty(self.clock.now_millis()),
            Err(err) => {
                tracing::warn!(error = %err, "analytics record read failed, serving empty record");
                return AnalyticsRecord::empty(self.clock.now_millis());
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "analytics record unparsable, serving empty record");
                AnalyticsRecord::empty(self.clock.now_millis())
            }
        }
    }

    /// Appends one entry to the record and persists it.
    ///
    /// Performs exactly one store read and one store write. See the type
    /// docs for the consistency semantics under concurrent appends.
    pub async fn append(&self, entry: RequestEntry) -> Result<()> {
        let record = self.load().await.append(entry, self.clock.now_millis());
        let raw = serde_json::to_vec(&record)
            .map_err(|e| Error::Encoding(format!("Failed to encode analytics record: {}", e)))?;
        self.storage.put(ANALYTICS_KEY, Bytes::from(raw)).await?;
        Ok(())
    }

    /// Deletes the record from the store entirely.
    ///
    /// The key becomes absent, so the next [`load`](AnalyticsDb::load)
    /// synthesizes a fresh default. One store delete, no read.
    pub async fn clear(&self) -> Result<()> {
        self.storage.delete(ANALYTICS_KEY).await?;
        Ok(())
    }

    /// Verifies the storage backend is reachable with a single read.
    ///
    /// Used by the readiness endpoint; does not inspect the record itself.
    pub async fn check_storage(&self) -> Result<()> {
        self.storage.get(ANALYTICS_KEY).await?;
        Ok(())
    }
}
