//! HTTP route handlers for the analytics server.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tokio::time::Instant;

use super::error::ApiError;
use super::metrics::Metrics;
use crate::model::RequestEntry;
use crate::AnalyticsDb;

/// Static dashboard page, embedded at compile time.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Upper bound of the synthetic processing delay, in milliseconds.
const MAX_SYNTHETIC_DELAY_MS: u64 = 50;

/// Header carrying the client IP at the edge.
const CLIENT_IP_HEADER: &str = "cf-connecting-ip";

/// Fallback client IP header; first hop of the forwarding chain.
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Header carrying the edge platform's country hint.
const COUNTRY_HEADER: &str = "cf-ipcountry";

/// Placeholder for any request attribute the edge did not supply.
const UNKNOWN: &str = "Unknown";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<AnalyticsDb>,
    pub metrics: Arc<Metrics>,
}

/// Body of the synthetic response returned for tracked paths.
#[derive(Debug, Serialize)]
pub struct TrackedResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub path: String,
    pub method: String,
}

/// Handle GET / and GET /dashboard
pub async fn handle_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Handle GET /api/analytics
///
/// Returns the current analytics record as JSON. The record layer defaults
/// an absent or unreadable record to the empty shape, so this endpoint
/// always returns 200. CORS-open so external dashboards can poll it.
pub async fn handle_analytics(State(state): State<AppState>) -> impl IntoResponse {
    let record = state.db.load().await;
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(record),
    )
}

/// Handle POST /api/clear
///
/// Deletes the analytics record; the key becomes absent and the next read
/// synthesizes a fresh default. Unlike the background append path, this has
/// a waiting caller, so a store failure surfaces as HTTP 500.
pub async fn handle_clear(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.clear().await?;
    state.metrics.record_clears_total.inc();

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(serde_json::json!({ "success": true })),
    ))
}

/// Handle any path not claimed by a control endpoint.
///
/// Produces an immediate synthetic response and captures the request's
/// metadata for analytics. The capture is dispatched as a detached task so
/// the response never waits on the store; a failed append is counted,
/// logged at debug, and dropped.
pub async fn handle_tracked(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<TrackedResponse> {
    let start = Instant::now();

    // Simulate a bounded unit of work so the demo response times vary.
    let delay = rand::random::<u64>() % MAX_SYNTHETIC_DELAY_MS;
    tokio::time::sleep(Duration::from_millis(delay)).await;

    let response_time = start.elapsed().as_millis() as u64;
    let now_ms = Utc::now().timestamp_millis() as u64;
    let entry = entry_from_request(&method, &uri, &headers, now_ms, response_time, 200);

    state.metrics.requests_tracked_total.inc();

    let db = state.db.clone();
    let metrics = state.metrics.clone();
    tokio::spawn(async move {
        match db.append(entry).await {
            Ok(()) => {
                metrics.record_appends_total.inc();
            }
            Err(err) => {
                // Fire-and-forget: nobody is waiting on this write.
                metrics.record_append_failures_total.inc();
                tracing::debug!(error = %err, "dropping failed analytics append");
            }
        }
    });

    Json(TrackedResponse {
        message: "Request tracked successfully!",
        timestamp: Utc::now().to_rfc3339(),
        path: uri.path().to_string(),
        method: method.to_string(),
    })
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}

/// Handle GET /-/healthy
///
/// Returns 200 OK if the service is running.
pub async fn handle_healthy() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Handle GET /-/ready
///
/// Returns 200 OK if the storage backend is reachable, 503 otherwise.
pub async fn handle_ready(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db.check_storage().await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not Ready"),
    }
}

/// Builds a [`RequestEntry`] from the inbound request's parts.
///
/// The query string is stripped from the URL; any absent header collapses
/// to `"Unknown"`.
fn entry_from_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    timestamp_ms: u64,
    response_time: u64,
    status: u16,
) -> RequestEntry {
    let ip = header_value(headers, CLIENT_IP_HEADER)
        .or_else(|| header_value(headers, FORWARDED_FOR_HEADER).map(|v| first_forwarded_hop(&v)))
        .unwrap_or_else(|| UNKNOWN.to_string());

    RequestEntry {
        timestamp: timestamp_ms,
        method: method.to_string(),
        url: uri.path().to_string(),
        user_agent: header_value(headers, header::USER_AGENT.as_str())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        ip,
        country: header_value(headers, COUNTRY_HEADER).unwrap_or_else(|| UNKNOWN.to_string()),
        response_time,
        status,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// `X-Forwarded-For` lists every hop; the client is the first one.
fn first_forwarded_hop(value: &str) -> String {
    value.split(',').next().unwrap_or(value).trim().to_string()
}
