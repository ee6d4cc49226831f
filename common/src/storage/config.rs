//! Storage backend configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageConfig {
    /// Non-durable in-process storage, for tests and local development.
    InMemory,

    /// Durable storage backed by an object store.
    ObjectStore(ObjectStoreConfig),
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::InMemory
    }
}

/// Configuration for an object store backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectStoreConfig {
    /// In-memory object store, for tests.
    InMemory,

    /// Local filesystem object store.
    Local(LocalObjectStoreConfig),

    /// Amazon S3 object store.
    Aws(AwsObjectStoreConfig),
}

/// Configuration for a local filesystem object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalObjectStoreConfig {
    /// Directory holding the stored objects. Created if it does not exist.
    pub path: String,
}

/// Configuration for an Amazon S3 object store.
///
/// Credentials are taken from the environment, following the usual AWS SDK
/// conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsObjectStoreConfig {
    /// AWS region of the bucket.
    pub region: String,

    /// Bucket name.
    pub bucket: String,
}
