//! Trendfuse API Server
//!
//! HTTP API exposing technical, sentiment and combined analysis.
//! This service is stateless and can be horizontally scaled.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use trendfuse::config::ServiceConfig;
use trendfuse::core::http::start_server;
use trendfuse::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = ServiceConfig::from_env();
    logging::init_logging(&config);

    info!("Starting Trendfuse API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        scorer_url = %config.scorer_url,
        timeout_ms = config.scorer_timeout.as_millis() as u64,
        concurrency = config.scorer_concurrency,
        "Sentiment scorer"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
