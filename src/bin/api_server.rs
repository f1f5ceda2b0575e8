// API Server Binary Entry Point
//
// Purpose: Start the Axum API server backed by the Open-Meteo archive
// Usage: cargo run --bin api_server

use rainwater_harvest::{create_router, AppState, OpenMeteoClient, ServiceConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "rainwater_harvest=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServiceConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  RAINFALL_API_URL: {}", config.rainfall.base_url);
    tracing::info!("  RAINFALL_TIMEOUT_SECS: {}", config.rainfall.timeout.as_secs());
    tracing::info!(
        "  RAINFALL_PERIOD: {} to {} ({})",
        config.rainfall.start_date,
        config.rainfall.end_date,
        config.rainfall.timezone
    );

    let client = OpenMeteoClient::new(config.rainfall.clone())?;
    let app = create_router(AppState::new(client));

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
