pub mod clock;
pub mod storage;

pub use clock::{Clock, SystemClock};
pub use storage::config::{
    AwsObjectStoreConfig, LocalObjectStoreConfig, ObjectStoreConfig, StorageConfig,
};
pub use storage::factory::{create_object_store, create_storage};
pub use storage::{InMemoryStorage, ObjectStoreStorage, Storage, StorageError, StorageResult};
