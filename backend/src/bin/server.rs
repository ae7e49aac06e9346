//! Audience dashboard HTTP server.
//!
//! Serves the dashboard view models as JSON for the browser front end. Every
//! request is answered from the upstream analytics API; nothing is cached.
//!
//! # Usage
//!
//! ```bash
//! AUDIENCE_API_BASE=https://audience.example.com/api \
//!   cargo run --bin audience-server
//! ```
//!
//! # Environment Variables
//!
//! - `AUDIENCE_CONFIG`: explicit path of the TOML config file
//! - `AUDIENCE_API_BASE`: upstream API base URL
//! - `AUDIENCE_API_TIMEOUT_SECS`: upstream request timeout
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use audience_dash::client::{ApiClient, AudienceApi};
use audience_dash::config::DashboardConfig;
use audience_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting audience dashboard server");

    let config_path = env::var_os("AUDIENCE_CONFIG").map(PathBuf::from);
    let config = DashboardConfig::load(config_path.as_deref())?;

    let client = ApiClient::new(&config.client_config())?;
    info!(upstream = client.base_url(), "Upstream API client ready");

    let state = AppState::new(
        Arc::new(client.clone()) as Arc<dyn AudienceApi>,
        client.base_url(),
    )
    .with_trend_settings(config.trend.clone());

    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
