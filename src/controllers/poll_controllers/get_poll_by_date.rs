use axum::{extract::Path, Json};
use chrono::NaiveDate;

use crate::models::poll_models::Poll;
use crate::polls;
use crate::utils::error::{AppError, AppResult};

pub async fn get_poll_by_date(Path(date): Path<String>) -> AppResult<Json<Poll>> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError("date must be in YYYY-MM-DD format".to_string()))?;

    Ok(Json(polls::poll_for_date(date)))
}
