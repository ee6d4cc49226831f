//! Configuration for the analytics HTTP server.

use clap::Parser;
use common::{
    AwsObjectStoreConfig, LocalObjectStoreConfig, ObjectStoreConfig, StorageConfig,
};

use crate::Config;

/// CLI arguments for the analytics server.
#[derive(Debug, Parser)]
#[command(name = "analytics")]
#[command(about = "EdgeWatch request analytics server")]
pub struct CliArgs {
    /// HTTP server port.
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Storage data directory path (for local storage).
    #[arg(long, default_value = ".data")]
    pub data_dir: String,

    /// Use in-memory storage (for testing).
    #[arg(long, default_value = "false")]
    pub in_memory: bool,

    /// S3 bucket name (enables S3 storage when set).
    #[arg(long)]
    pub s3_bucket: Option<String>,

    /// AWS region for S3 storage.
    #[arg(long, default_value = "us-east-1")]
    pub s3_region: String,
}

impl CliArgs {
    /// Convert CLI args to the record-layer configuration.
    pub fn to_config(&self) -> Config {
        let storage = if self.in_memory {
            StorageConfig::InMemory
        } else if let Some(bucket) = &self.s3_bucket {
            StorageConfig::ObjectStore(ObjectStoreConfig::Aws(AwsObjectStoreConfig {
                region: self.s3_region.clone(),
                bucket: bucket.clone(),
            }))
        } else {
            StorageConfig::ObjectStore(ObjectStoreConfig::Local(LocalObjectStoreConfig {
                path: self.data_dir.clone(),
            }))
        };

        Config { storage }
    }
}

/// Configuration for the analytics HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            port: 9090,
            data_dir: ".data".to_string(),
            in_memory: false,
            s3_bucket: None,
            s3_region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn should_create_in_memory_config() {
        // given
        let args = CliArgs {
            in_memory: true,
            ..base_args()
        };

        // when
        let config = args.to_config();

        // then
        assert!(matches!(config.storage, StorageConfig::InMemory));
    }

    #[test]
    fn should_create_local_object_store_config() {
        // given
        let args = CliArgs {
            data_dir: "/tmp/analytics-data".to_string(),
            ..base_args()
        };

        // when
        let config = args.to_config();

        // then
        match config.storage {
            StorageConfig::ObjectStore(ObjectStoreConfig::Local(local_config)) => {
                assert_eq!(local_config.path, "/tmp/analytics-data");
            }
            other => panic!("Expected Local object store, got {:?}", other),
        }
    }

    #[test]
    fn should_create_s3_object_store_config() {
        // given
        let args = CliArgs {
            s3_bucket: Some("my-bucket".to_string()),
            s3_region: "us-west-2".to_string(),
            ..base_args()
        };

        // when
        let config = args.to_config();

        // then
        match config.storage {
            StorageConfig::ObjectStore(ObjectStoreConfig::Aws(aws_config)) => {
                assert_eq!(aws_config.bucket, "my-bucket");
                assert_eq!(aws_config.region, "us-west-2");
            }
            other => panic!("Expected Aws object store, got {:?}", other),
        }
    }

    #[test]
    fn should_create_server_config_from_cli_args() {
        // given
        let args = base_args();

        // when
        let server_config = ServerConfig::from(&args);

        // then
        assert_eq!(server_config.port, 9090);
    }
}
