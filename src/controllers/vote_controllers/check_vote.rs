use axum::{
    extract::{Query, State},
    Json,
};

use crate::controllers::vote_controllers::models::{CheckVoteQuery, CheckVoteResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn check_vote(
    State(state): State<AppState>,
    Query(query): Query<CheckVoteQuery>,
) -> AppResult<Json<CheckVoteResponse>> {
    let existing = state
        .service
        .check_vote(query.poll_id.as_deref(), query.user_fid.as_deref())
        .await?;

    let response = match existing {
        Some(vote) => CheckVoteResponse {
            has_voted: true,
            option: Some(vote.option),
            timestamp: Some(vote.timestamp),
        },
        None => CheckVoteResponse {
            has_voted: false,
            option: None,
            timestamp: None,
        },
    };

    Ok(Json(response))
}
