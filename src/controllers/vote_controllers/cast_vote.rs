use axum::{extract::State, Json};

use crate::controllers::vote_controllers::models::CastVoteResponse;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn cast_vote(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<CastVoteResponse>> {
    let (vote, counts) = state.service.cast_vote(&body).await?;

    tracing::info!(
        poll_id = %vote.poll_id,
        user_fid = vote.user_fid,
        option = vote.option.as_str(),
        "vote recorded"
    );

    Ok(Json(CastVoteResponse {
        success: true,
        vote,
        counts,
    }))
}
