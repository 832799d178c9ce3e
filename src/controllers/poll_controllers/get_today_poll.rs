use axum::Json;

use crate::models::poll_models::Poll;
use crate::polls;

pub async fn get_today_poll() -> Json<Poll> {
    Json(polls::today_poll())
}
