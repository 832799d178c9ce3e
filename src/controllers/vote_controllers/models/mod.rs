use serde::{Deserialize, Serialize};

use crate::models::vote_models::{Tally, Vote, VoteOption};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyQuery {
    pub poll_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVoteQuery {
    pub poll_id: Option<String>,
    pub user_fid: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyResponse {
    pub poll_id: String,
    #[serde(flatten)]
    pub counts: Tally,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVoteResponse {
    pub has_voted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<VoteOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub success: bool,
    pub vote: Vote,
    pub counts: Tally,
}
