//! Core data types for EdgeWatch analytics.
//!
//! This module defines the persisted [`AnalyticsRecord`] and its
//! [`RequestEntry`] elements, along with the pure append/retention policy.
//! The wire format uses camelCase field names; consumers of the JSON API
//! (the dashboard, external pollers) depend on the exact key spellings.

use serde::{Deserialize, Serialize};

/// Maximum number of request entries retained in the rolling log.
///
/// Older entries are evicted first; the total request counter keeps counting
/// past this cap.
pub const RETENTION_CAP: usize = 100;

/// One logged request's metadata snapshot.
///
/// Entries are immutable once created. They are only ever added to the front
/// of [`AnalyticsRecord::requests`] and eventually evicted off the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEntry {
    /// Milliseconds since the Unix epoch at capture time.
    pub timestamp: u64,

    /// HTTP method of the inbound request.
    pub method: String,

    /// Request path with any query string stripped.
    pub url: String,

    /// `User-Agent` header, or `"Unknown"` if absent.
    pub user_agent: String,

    /// Client IP as reported by the edge, or `"Unknown"` if absent.
    pub ip: String,

    /// Country code hint supplied by the edge platform, or `"Unknown"`.
    pub country: String,

    /// Observed processing time in milliseconds.
    pub response_time: u64,

    /// HTTP status code returned to the caller.
    pub status: u16,
}

/// The single persisted object holding the rolling request log.
///
/// There is exactly one record per deployment, stored as one JSON value
/// under one key. The record is replaced wholesale on every append and
/// deleted wholesale on clear; entries are never addressed individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRecord {
    /// Retained entries, newest first, at most [`RETENTION_CAP`].
    pub requests: Vec<RequestEntry>,

    /// Count of all requests ever observed, including evicted ones.
    pub total_requests: u64,

    /// Milliseconds since the Unix epoch of the most recent write.
    pub last_updated: u64,
}

impl AnalyticsRecord {
    /// Returns a fresh zero-value record stamped with `now_ms`.
    ///
    /// Absence of the record in the store is equivalent to this value.
    pub fn empty(now_ms: u64) -> Self {
        Self {
            requests: Vec::new(),
            total_requests: 0,
            last_updated: now_ms,
        }
    }

    /// Applies one append to the record: prepend, truncate, count, stamp.
    ///
    /// This is the entire update/retention policy, kept pure so it can be
    /// tested without a store. The caller persists the returned record.
    pub fn append(mut self, entry: RequestEntry, now_ms: u64) -> Self {
        self.requests.insert(0, entry);
        self.requests.truncate(RETENTION_CAP);
        self.total_requests += 1;
        self.last_updated = now_ms;
        self
    }
}
