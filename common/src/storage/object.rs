//! Object-store storage backend.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};

use super::{Storage, StorageError, StorageResult};

/// Durable [`Storage`] backed by an [`ObjectStore`].
///
/// Each key maps to one object; values are replaced wholesale on put. The
/// backing store may be a local filesystem, S3, or an in-memory store
/// depending on configuration.
pub struct ObjectStoreStorage {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreStorage {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    fn object_path(key: &str) -> Path {
        Path::from(key)
    }
}

#[async_trait]
impl Storage for ObjectStoreStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
        let path = Self::object_path(key);
        match self.store.get(&path).await {
            Ok(result) => {
                let data = result.bytes().await.map_err(|e| {
                    StorageError::Storage(format!("Failed to read object '{}': {}", key, e))
                })?;
                Ok(Some(data))
            }
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(StorageError::Storage(format!(
                "Failed to get object '{}': {}",
                key, e
            ))),
        }
    }

    async fn put(&self, key: &str, value: Bytes) -> StorageResult<()> {
        let path = Self::object_path(key);
        self.store
            .put(&path, PutPayload::from(value))
            .await
            .map_err(|e| StorageError::Storage(format!("Failed to put object '{}': {}", key, e)))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = Self::object_path(key);
        match self.store.delete(&path).await {
            Ok(()) => Ok(()),
            // Deleting an absent key succeeds; clear must be idempotent.
            Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(StorageError::Storage(format!(
                "Failed to delete object '{}': {}",
                key, e
            ))),
        }
    }
}
