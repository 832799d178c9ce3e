use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use daily_poll::services::VoteService;
use daily_poll::state::AppState;
use daily_poll::store::VoteStore;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(VoteStore::new());
    let state = AppState::new(VoteService::new(store));

    let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| {
        tracing::warn!("CORS_ORIGIN not set, using default http://localhost:3000");
        "http://localhost:3000".to_string()
    });

    let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::error!("Failed to parse CORS origin: {}", cors_origin);
        std::process::exit(1);
    });

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::header::AUTHORIZATION,
        ]);

    let app = daily_poll::app(state).layer(cors);

    let server_addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| {
        tracing::warn!("SERVER_ADDR not set, using default 0.0.0.0:8000");
        "0.0.0.0:8000".to_string()
    });

    let addr: SocketAddr = server_addr.parse().unwrap_or_else(|_| {
        tracing::error!("Failed to parse SERVER_ADDR: {}", server_addr);
        std::process::exit(1);
    });

    tracing::info!("Server running at http://{}", addr);
    tracing::info!("CORS origin: {}", cors_origin);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
