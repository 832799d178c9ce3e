use axum::{
    extract::{Query, State},
    Json,
};

use crate::controllers::vote_controllers::models::{TallyQuery, TallyResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_tally(
    State(state): State<AppState>,
    Query(query): Query<TallyQuery>,
) -> AppResult<Json<TallyResponse>> {
    let counts = state.service.get_tally(query.poll_id.as_deref()).await?;

    Ok(Json(TallyResponse {
        poll_id: query.poll_id.unwrap_or_default(),
        counts,
    }))
}
