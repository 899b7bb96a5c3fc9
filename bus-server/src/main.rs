use std::net::SocketAddr;

use bus_server::cache::{CacheConfig, CachedPtvClient};
use bus_server::config::AppConfig;
use bus_server::ptv::{PtvClient, PtvConfig};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_server=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // Start anyway: /api/config still reports what is missing.
    if let Err(message) = config.require() {
        tracing::warn!("{message}; /api/arrivals will fail until it is set");
    }

    let ptv_config = PtvConfig::new(config.user_id.clone(), config.api_key.clone());
    let client = PtvClient::new(ptv_config).expect("failed to create PTV client");
    let cached = CachedPtvClient::new(client, config.stop_query(), &CacheConfig::default());

    let port = config.port;
    let state = AppState::new(config, cached);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("bus arrival display listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
