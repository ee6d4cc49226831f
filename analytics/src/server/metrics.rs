//! Prometheus metrics for the analytics server.

use axum::http::Method;
use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;

/// Labels for HTTP request metrics.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabelsWithStatus {
    pub method: HttpMethod,
    pub endpoint: String,
    pub status: u16,
}

/// HTTP method label value.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Other,
}

impl From<&Method> for HttpMethod {
    fn from(method: &Method) -> Self {
        match *method {
            Method::GET => HttpMethod::Get,
            Method::POST => HttpMethod::Post,
            Method::PUT => HttpMethod::Put,
            Method::DELETE => HttpMethod::Delete,
            Method::PATCH => HttpMethod::Patch,
            Method::HEAD => HttpMethod::Head,
            Method::OPTIONS => HttpMethod::Options,
            _ => HttpMethod::Other,
        }
    }
}

/// Container for all Prometheus metrics.
pub struct Metrics {
    registry: Registry,

    /// Counter of requests captured by the interceptor.
    pub requests_tracked_total: Counter,

    /// Counter of record appends persisted to the store.
    pub record_appends_total: Counter,

    /// Counter of background appends dropped after a failure.
    pub record_append_failures_total: Counter,

    /// Counter of record clears.
    pub record_clears_total: Counter,

    /// Counter of HTTP requests.
    pub http_requests_total: Family<HttpLabelsWithStatus, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics registry with all metrics registered.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let requests_tracked_total = Counter::default();
        registry.register(
            "analytics_requests_tracked_total",
            "Total number of requests captured by the interceptor",
            requests_tracked_total.clone(),
        );

        let record_appends_total = Counter::default();
        registry.register(
            "analytics_record_appends_total",
            "Total number of entries appended to the analytics record",
            record_appends_total.clone(),
        );

        let record_append_failures_total = Counter::default();
        registry.register(
            "analytics_record_append_failures_total",
            "Total number of background appends dropped after a failure",
            record_append_failures_total.clone(),
        );

        let record_clears_total = Counter::default();
        registry.register(
            "analytics_record_clears_total",
            "Total number of analytics record clears",
            record_clears_total.clone(),
        );

        let http_requests_total = Family::<HttpLabelsWithStatus, Counter>::default();
        registry.register(
            "http_requests_total",
            "Total number of HTTP requests",
            http_requests_total.clone(),
        );

        Self {
            registry,
            requests_tracked_total,
            record_appends_total,
            record_append_failures_total,
            record_clears_total,
            http_requests_total,
        }
    }

    /// Encode all metrics to Prometheus text format.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        prometheus_client::encoding::text::encode(&mut buffer, &self.registry)
            .expect("encoding metrics should not fail");
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_default_metrics() {
        // given/when
        let metrics = Metrics::new();

        // then
        let encoded = metrics.encode();
        assert!(encoded.contains("# HELP analytics_requests_tracked_total"));
        assert!(encoded.contains("# HELP analytics_record_appends_total"));
        assert!(encoded.contains("# HELP analytics_record_append_failures_total"));
        assert!(encoded.contains("# HELP analytics_record_clears_total"));
        assert!(encoded.contains("# HELP http_requests_total"));
    }

    #[test]
    fn should_convert_http_method_to_label() {
        // given
        let method = Method::POST;

        // when
        let label = HttpMethod::from(&method);

        // then
        assert!(matches!(label, HttpMethod::Post));
    }
}
