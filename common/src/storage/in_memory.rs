//! In-memory storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use super::{Storage, StorageError, StorageResult};

/// Non-durable [`Storage`] backed by a process-local hash map.
///
/// Used for tests and local development. Values do not survive process
/// restart.
#[derive(Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Bytes) -> StorageResult<()> {
        if key.is_empty() {
            return Err(StorageError::Internal("empty storage key".to_string()));
        }
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_for_absent_key() {
        // given
        let storage = InMemoryStorage::new();

        // when
        let value = storage.get("missing").await.unwrap();

        // then
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn should_round_trip_a_value() {
        // given
        let storage = InMemoryStorage::new();

        // when
        storage.put("key", Bytes::from("value")).await.unwrap();
        let value = storage.get("key").await.unwrap();

        // then
        assert_eq!(value, Some(Bytes::from("value")));
    }

    #[tokio::test]
    async fn should_replace_existing_value_on_put() {
        // given
        let storage = InMemoryStorage::new();
        storage.put("key", Bytes::from("old")).await.unwrap();

        // when
        storage.put("key", Bytes::from("new")).await.unwrap();

        // then
        assert_eq!(storage.get("key").await.unwrap(), Some(Bytes::from("new")));
    }

    #[tokio::test]
    async fn should_delete_a_value() {
        // given
        let storage = InMemoryStorage::new();
        storage.put("key", Bytes::from("value")).await.unwrap();

        // when
        storage.delete("key").await.unwrap();

        // then
        assert_eq!(storage.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_tolerate_deleting_an_absent_key() {
        // given
        let storage = InMemoryStorage::new();

        // when
        let result = storage.delete("missing").await;

        // then
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_key() {
        // given
        let storage = InMemoryStorage::new();

        // when
        let result = storage.put("", Bytes::from("value")).await;

        // then
        assert!(result.is_err());
    }
}
