//! HTTP server for EdgeWatch analytics.
//!
//! This module provides the HTTP surface: the dashboard page, the JSON
//! analytics API, and the catch-all request interceptor that feeds the
//! rolling log.

mod config;
mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;

pub use config::{CliArgs, ServerConfig};
pub use http::AnalyticsServer;
