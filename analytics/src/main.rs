//! EdgeWatch analytics server binary.

use std::sync::Arc;

use clap::Parser;

use analytics::server::{AnalyticsServer, CliArgs, ServerConfig};
use analytics::AnalyticsDb;

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = CliArgs::parse();
    let server_config = ServerConfig::from(&args);

    let db = match AnalyticsDb::open(args.to_config()) {
        Ok(db) => Arc::new(db),
        Err(err) => {
            tracing::error!(error = %err, "failed to open analytics storage");
            std::process::exit(1);
        }
    };

    AnalyticsServer::new(db, server_config).run().await;
}
