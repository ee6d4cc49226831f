//! EdgeWatch analytics: a bounded rolling log of request metadata over a
//! durable key-value store, exposed through a JSON API and a dashboard page.
//!
//! The crate is split into the record layer ([`AnalyticsDb`] over
//! [`common::Storage`]) and the HTTP server ([`server`]). The record layer
//! owns the single persisted [`AnalyticsRecord`]; the server intercepts
//! inbound requests, serves the dashboard, and exposes the JSON API.

mod config;
mod error;
pub mod model;
mod record;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{AnalyticsRecord, RequestEntry, RETENTION_CAP};
pub use record::{AnalyticsDb, ANALYTICS_KEY};
