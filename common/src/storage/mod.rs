//! Key-value storage abstraction.
//!
//! This module defines [`Storage`], the narrow contract the rest of the
//! system depends on: get, put, and delete of opaque byte values under string
//! keys. Backends are selected via [`config::StorageConfig`] and constructed
//! by [`factory::create_storage`].

pub mod config;
pub mod factory;
pub mod in_memory;
pub mod object;

use async_trait::async_trait;
use bytes::Bytes;

pub use in_memory::InMemoryStorage;
pub use object::ObjectStoreStorage;

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Errors from the underlying storage backend, such as I/O failures
    /// or an unreachable object store.
    Storage(String),

    /// Unexpected internal errors indicating bugs or invariant violations.
    Internal(String),
}

impl std::error::Error for StorageError {}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Storage(msg) => write!(f, "Storage error: {}", msg),
            StorageError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A durable key-value store holding opaque byte values.
///
/// The contract is deliberately minimal: whole-value get, put, and delete
/// under a string key. No atomic read-modify-write primitive is exposed;
/// callers that read-then-write get last-write-wins semantics.
///
/// Absence of a key is a valid state, reported as `Ok(None)` from [`get`],
/// never as an error. [`delete`] of an absent key succeeds.
///
/// [`get`]: Storage::get
/// [`delete`]: Storage::delete
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetches the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> StorageResult<Option<Bytes>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: Bytes) -> StorageResult<()>;

    /// Removes the value stored under `key`. Deleting an absent key is not
    /// an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;
}
