use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::vote_controllers::{cast_vote, check_vote, get_tally};
use crate::state::AppState;

pub fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tally::get_tally).post(cast_vote::cast_vote))
        .route("/check", get(check_vote::check_vote))
}
