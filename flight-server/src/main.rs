use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use flight_server::sky::{SkyClient, SkyConfig};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Get credentials from environment
    let api_key = std::env::var("RAPIDAPI_KEY").unwrap_or_else(|_| {
        tracing::warn!("RAPIDAPI_KEY not set. API calls will fail.");
        String::new()
    });

    // Create API client
    let config = SkyConfig::new(&api_key);
    let sky = SkyClient::new(config).expect("Failed to create Sky-Scrapper client");

    // Build app state and router
    let state = AppState::new(sky);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Flight search server listening on http://{addr}");
    tracing::info!("  GET /health              - Health check");
    tracing::info!("  GET /api/airports/search - Airport lookup");
    tracing::info!("  GET /api/flights/search  - Flight search");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
