//! Storage factory for creating storage instances from configuration.

use std::sync::Arc;

use object_store::ObjectStore;

use super::config::{ObjectStoreConfig, StorageConfig};
use super::in_memory::InMemoryStorage;
use super::object::ObjectStoreStorage;
use super::{Storage, StorageError, StorageResult};

/// Creates an object store from configuration.
pub fn create_object_store(config: &ObjectStoreConfig) -> StorageResult<Arc<dyn ObjectStore>> {
    match config {
        ObjectStoreConfig::InMemory => Ok(Arc::new(object_store::memory::InMemory::new())),
        ObjectStoreConfig::Aws(aws_config) => {
            let store = object_store::aws::AmazonS3Builder::from_env()
                .with_region(&aws_config.region)
                .with_bucket_name(&aws_config.bucket)
                .build()
                .map_err(|e| {
                    StorageError::Storage(format!("Failed to create AWS S3 store: {}", e))
                })?;
            Ok(Arc::new(store))
        }
        ObjectStoreConfig::Local(local_config) => {
            std::fs::create_dir_all(&local_config.path).map_err(|e| {
                StorageError::Storage(format!(
                    "Failed to create storage directory '{}': {}",
                    local_config.path, e
                ))
            })?;
            let store = object_store::local::LocalFileSystem::new_with_prefix(&local_config.path)
                .map_err(|e| {
                StorageError::Storage(format!("Failed to create local filesystem store: {}", e))
            })?;
            Ok(Arc::new(store))
        }
    }
}

/// Creates a storage instance based on configuration.
///
/// This is the primary factory function for creating storage backends.
///
/// # Arguments
///
/// * `config` - The storage configuration specifying the backend type and settings.
///
/// # Returns
///
/// Returns an `Arc<dyn Storage>` on success, or a `StorageError` on failure.
pub fn create_storage(config: &StorageConfig) -> StorageResult<Arc<dyn Storage>> {
    match config {
        StorageConfig::InMemory => Ok(Arc::new(InMemoryStorage::new())),
        StorageConfig::ObjectStore(object_config) => {
            let store = create_object_store(object_config)?;
            Ok(Arc::new(ObjectStoreStorage::new(store)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::LocalObjectStoreConfig;
    use bytes::Bytes;
    use tempfile::TempDir;

    #[tokio::test]
    async fn should_create_in_memory_storage() {
        // given
        let config = StorageConfig::InMemory;

        // when
        let storage = create_storage(&config).unwrap();

        // then
        storage.put("key", Bytes::from("value")).await.unwrap();
        assert_eq!(
            storage.get("key").await.unwrap(),
            Some(Bytes::from("value"))
        );
    }

    #[tokio::test]
    async fn should_create_local_object_storage() {
        // given
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::ObjectStore(ObjectStoreConfig::Local(LocalObjectStoreConfig {
            path: dir.path().to_string_lossy().to_string(),
        }));

        // when
        let storage = create_storage(&config).unwrap();

        // then
        storage.put("key", Bytes::from("value")).await.unwrap();
        assert_eq!(
            storage.get("key").await.unwrap(),
            Some(Bytes::from("value"))
        );
    }

    #[tokio::test]
    async fn should_create_missing_local_directory() {
        // given
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data");
        let config = StorageConfig::ObjectStore(ObjectStoreConfig::Local(LocalObjectStoreConfig {
            path: nested.to_string_lossy().to_string(),
        }));

        // when
        let storage = create_storage(&config);

        // then
        assert!(storage.is_ok());
        assert!(nested.exists());
    }

    #[test]
    fn should_create_in_memory_object_store() {
        // given
        let config = ObjectStoreConfig::InMemory;

        // when
        let store = create_object_store(&config);

        // then
        assert!(store.is_ok());
    }
}
