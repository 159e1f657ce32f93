//! HTTP facade for the metrics providers.
//!
//! Routes `GET /` to live utilization and `GET /info` to static identity,
//! with permissive CORS for browser dashboards. The facade owns nothing but
//! the listener lifecycle: bind at startup, serve until terminated.

pub mod config;
pub mod handlers;
pub mod router;

pub use config::WebConfig;
pub use router::create_app;

use std::net::SocketAddr;

use tracing::info;

use crate::error::{MetricsError, Result};

/// Bind the listener and serve the metrics endpoints until terminated.
pub async fn start_web_server(config: WebConfig) -> Result<()> {
    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| MetricsError::config_error(format!("Invalid bind address: {e}")))?;

    let app = create_app(&config);

    info!("Starting hoststat exporter on http://{addr}");
    info!("Live metrics: http://{addr}/ (one-second sampling window)");
    info!("Host identity: http://{addr}/info");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MetricsError::web_server_error(format!("Server error: {e}")))?;

    Ok(())
}
