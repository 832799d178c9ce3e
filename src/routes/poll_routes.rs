use axum::{routing::get, Router};

use crate::controllers::poll_controllers::{get_categories, get_poll_by_date, get_today_poll};
use crate::state::AppState;

pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/today", get(get_today_poll::get_today_poll))
        .route("/categories", get(get_categories::get_categories))
        .route("/:date", get(get_poll_by_date::get_poll_by_date))
}
