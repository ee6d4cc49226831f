//! Configuration for the analytics record layer.

use common::StorageConfig;

/// Configuration for [`AnalyticsDb`](crate::AnalyticsDb).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Storage backend holding the analytics record.
    pub storage: StorageConfig,
}
