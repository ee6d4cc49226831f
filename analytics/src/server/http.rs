//! HTTP server assembly and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::signal;

use super::config::ServerConfig;
use super::handlers::{
    handle_analytics, handle_clear, handle_dashboard, handle_healthy, handle_metrics,
    handle_ready, handle_tracked, AppState,
};
use super::metrics::Metrics;
use super::middleware::{MetricsLayer, TracingLayer};
use crate::AnalyticsDb;

/// The analytics HTTP server.
///
/// Control endpoints are routed explicitly; every other path falls through
/// to the interceptor, which answers with a synthetic response and records
/// the request in the rolling log.
pub struct AnalyticsServer {
    db: Arc<AnalyticsDb>,
    config: ServerConfig,
}

impl AnalyticsServer {
    pub fn new(db: Arc<AnalyticsDb>, config: ServerConfig) -> Self {
        Self { db, config }
    }

    /// Run the HTTP server until shutdown is signalled.
    pub async fn run(self) {
        let metrics = Arc::new(Metrics::new());

        let state = AppState {
            db: self.db.clone(),
            metrics: metrics.clone(),
        };

        let app = Router::new()
            .route("/", get(handle_dashboard))
            .route("/dashboard", get(handle_dashboard))
            .route("/api/analytics", get(handle_analytics))
            .route("/api/clear", post(handle_clear))
            .route("/metrics", get(handle_metrics))
            .route("/-/healthy", get(handle_healthy))
            .route("/-/ready", get(handle_ready))
            .fallback(handle_tracked)
            .layer(TracingLayer::new())
            .layer(MetricsLayer::new(metrics))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting analytics server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .unwrap();

        tracing::info!("Server shut down gracefully");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
