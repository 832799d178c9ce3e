use std::time::Instant;

use axum::{response::Json, routing::get, Router};
use once_cell::sync::Lazy;
use serde_json::json;

pub mod controllers;
pub mod models;
pub mod polls;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

use state::AppState;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/polls", routes::poll_routes::poll_routes())
        .nest("/api/votes", routes::vote_routes::vote_routes())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    let elapsed = START_TIME.elapsed();
    let seconds = elapsed.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let uptime_message = if days > 0 {
        format!("{}d {}h {}m {}s", days, hours % 24, minutes % 60, seconds % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "message": format!("Backend is running! Uptime: {}", uptime_message)
    }))
}
