//! Integration tests for analytics record durability.
//!
//! These tests verify that the record written by one AnalyticsDb instance
//! is visible to a separate instance opened over the same local storage.

use analytics::{AnalyticsDb, Config, RequestEntry};
use common::{LocalObjectStoreConfig, ObjectStoreConfig, StorageConfig};
use tempfile::TempDir;

fn local_storage_config(dir: &TempDir) -> StorageConfig {
    StorageConfig::ObjectStore(ObjectStoreConfig::Local(LocalObjectStoreConfig {
        path: dir.path().to_string_lossy().to_string(),
    }))
}

fn entry(method: &str, url: &str) -> RequestEntry {
    RequestEntry {
        timestamp: 1_700_000_000_000,
        method: method.to_string(),
        url: url.to_string(),
        user_agent: "integration-test".to_string(),
        ip: "192.0.2.1".to_string(),
        country: "US".to_string(),
        response_time: 21,
        status: 200,
    }
}

#[tokio::test]
async fn record_survives_reopen_of_local_storage() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = local_storage_config(&temp_dir);

    // Write through one instance
    let writer = AnalyticsDb::open(Config {
        storage: storage.clone(),
    })
    .expect("Failed to open writer");
    writer
        .append(entry("GET", "/api/users"))
        .await
        .expect("Failed to append");
    writer
        .append(entry("POST", "/api/orders"))
        .await
        .expect("Failed to append");
    drop(writer);

    // A fresh instance over the same directory sees the record
    let reader = AnalyticsDb::open(Config { storage }).expect("Failed to open reader");
    let record = reader.load().await;

    assert_eq!(record.total_requests, 2);
    assert_eq!(record.requests.len(), 2);
    assert_eq!(record.requests[0].url, "/api/orders");
    assert_eq!(record.requests[1].url, "/api/users");
}

#[tokio::test]
async fn clear_removes_the_record_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = local_storage_config(&temp_dir);

    let writer = AnalyticsDb::open(Config {
        storage: storage.clone(),
    })
    .expect("Failed to open writer");
    writer
        .append(entry("GET", "/api/users"))
        .await
        .expect("Failed to append");
    writer.clear().await.expect("Failed to clear");
    drop(writer);

    let reader = AnalyticsDb::open(Config { storage }).expect("Failed to open reader");
    let record = reader.load().await;

    assert!(record.requests.is_empty());
    assert_eq!(record.total_requests, 0);
}

#[tokio::test]
async fn retention_window_holds_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = local_storage_config(&temp_dir);

    let writer = AnalyticsDb::open(Config {
        storage: storage.clone(),
    })
    .expect("Failed to open writer");
    for n in 0..120u64 {
        writer
            .append(entry("GET", &format!("/page/{}", n)))
            .await
            .expect("Failed to append");
    }
    drop(writer);

    let reader = AnalyticsDb::open(Config { storage }).expect("Failed to open reader");
    let record = reader.load().await;

    assert_eq!(record.requests.len(), 100);
    assert_eq!(record.total_requests, 120);
    assert_eq!(record.requests[0].url, "/page/119");
    assert_eq!(record.requests[99].url, "/page/20");
}
