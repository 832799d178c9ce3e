use std::sync::Arc;

use serde_json::Value;

use crate::models::vote_models::{Tally, Vote, VoteOption};
use crate::store::VoteStore;
use crate::utils::error::{AppError, AppResult};

/// Business rules for voting. Inputs arrive raw and possibly absent, exactly
/// as the HTTP layer received them; this is the only place that decides what
/// is valid, so the rules stay testable without a running server.
#[derive(Clone)]
pub struct VoteService {
    store: Arc<VoteStore>,
}

impl VoteService {
    pub fn new(store: Arc<VoteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &VoteStore {
        &self.store
    }

    /// Counts for one poll. A poll nobody voted on yields the zero tally.
    pub async fn get_tally(&self, poll_id: Option<&str>) -> AppResult<Tally> {
        let poll_id = poll_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::ValidationError("pollId is required".to_string()))?;

        Ok(self.store.tally(poll_id).await)
    }

    /// Whether `user_fid` already voted on `poll_id`. The fid arrives as a
    /// query-string value and must parse as an integer.
    pub async fn check_vote(
        &self,
        poll_id: Option<&str>,
        user_fid: Option<&str>,
    ) -> AppResult<Option<Vote>> {
        let (poll_id, fid_raw) = match (
            poll_id.filter(|id| !id.is_empty()),
            user_fid.filter(|fid| !fid.is_empty()),
        ) {
            (Some(poll_id), Some(fid_raw)) => (poll_id, fid_raw),
            _ => {
                return Err(AppError::ValidationError(
                    "pollId and userFid are required".to_string(),
                ))
            }
        };

        let user_fid: i64 = fid_raw
            .parse()
            .map_err(|_| AppError::ValidationError("userFid must be a number".to_string()))?;

        Ok(self.store.has_voted(poll_id, user_fid).await)
    }

    /// Record one vote. The body is checked field by field, never coerced:
    /// `pollId` a non-empty string, `userFid` an integer, `option` exactly
    /// `"A"` or `"B"`. A duplicate (pollId, userFid) pair is a Conflict and
    /// leaves the store untouched; the store mutation is the last step, so
    /// nothing before it has side effects.
    pub async fn cast_vote(&self, body: &Value) -> AppResult<(Vote, Tally)> {
        let poll_id = body
            .get("pollId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty());
        let user_fid_field = body.get("userFid").filter(|fid| !fid.is_null());
        let option_raw = body.get("option").and_then(Value::as_str);

        let (poll_id, user_fid_field, option_raw) = match (poll_id, user_fid_field, option_raw) {
            (Some(poll_id), Some(user_fid_field), Some(option_raw)) => {
                (poll_id, user_fid_field, option_raw)
            }
            _ => {
                return Err(AppError::ValidationError(
                    "pollId, userFid, and option are required".to_string(),
                ))
            }
        };

        let user_fid = user_fid_field
            .as_i64()
            .ok_or_else(|| AppError::ValidationError("userFid must be a number".to_string()))?;

        let option = VoteOption::parse(option_raw)
            .ok_or_else(|| AppError::ValidationError("option must be 'A' or 'B'".to_string()))?;

        let vote = self
            .store
            .try_insert(poll_id, user_fid, option)
            .await
            .map_err(|_| {
                AppError::Conflict("User has already voted for this poll".to_string())
            })?;

        let counts = self.store.tally(poll_id).await;
        Ok((vote, counts))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn service() -> VoteService {
        VoteService::new(Arc::new(VoteStore::new()))
    }

    #[tokio::test]
    async fn cast_then_duplicate_then_second_voter() {
        let service = service();

        let (vote, counts) = service
            .cast_vote(&json!({"pollId": "p1", "userFid": 42, "option": "A"}))
            .await
            .unwrap();
        assert_eq!(vote.user_fid, 42);
        assert_eq!(vote.option, VoteOption::A);
        assert_eq!((counts.option_a, counts.option_b, counts.total), (1, 0, 1));

        // Re-voting is terminal: same user, different option, still rejected.
        let err = service
            .cast_vote(&json!({"pollId": "p1", "userFid": 42, "option": "B"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let counts = service.get_tally(Some("p1")).await.unwrap();
        assert_eq!((counts.option_a, counts.option_b, counts.total), (1, 0, 1));

        let (_, counts) = service
            .cast_vote(&json!({"pollId": "p1", "userFid": 7, "option": "B"}))
            .await
            .unwrap();
        assert_eq!((counts.option_a, counts.option_b, counts.total), (1, 1, 2));
        assert_eq!(service.store().len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_cast_grows_the_store_by_exactly_one() {
        let service = service();
        let body = json!({"pollId": "p1", "userFid": 42, "option": "A"});

        assert!(service.cast_vote(&body).await.is_ok());
        assert!(service.cast_vote(&body).await.is_err());
        assert_eq!(service.store().len().await, 1);
    }

    #[tokio::test]
    async fn invalid_option_is_rejected_without_state_change() {
        let service = service();

        for option in ["C", "", "a"] {
            let err = service
                .cast_vote(&json!({"pollId": "p1", "userFid": 42, "option": option}))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)), "{option:?}");
        }
        assert!(service.store().is_empty().await);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let service = service();

        let err = service
            .cast_vote(&json!({"userFid": 42, "option": "A"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service
            .cast_vote(&json!({"pollId": "p1", "option": "A"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        assert!(service.store().is_empty().await);
    }

    #[tokio::test]
    async fn non_numeric_user_fid_is_rejected() {
        let service = service();

        let err = service
            .cast_vote(&json!({"pollId": "p1", "userFid": "42", "option": "A"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service
            .check_vote(Some("p1"), Some("not-a-number"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn check_vote_before_any_vote() {
        let service = service();
        assert!(service.check_vote(Some("p1"), Some("99")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn check_vote_after_voting_returns_the_vote() {
        let service = service();
        service
            .cast_vote(&json!({"pollId": "p1", "userFid": 42, "option": "B"}))
            .await
            .unwrap();

        let vote = service.check_vote(Some("p1"), Some("42")).await.unwrap().unwrap();
        assert_eq!(vote.option, VoteOption::B);
    }

    #[tokio::test]
    async fn get_tally_requires_a_poll_id() {
        let service = service();
        assert!(matches!(
            service.get_tally(None).await.unwrap_err(),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            service.get_tally(Some("")).await.unwrap_err(),
            AppError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn unknown_poll_tally_is_empty_not_an_error() {
        let service = service();
        let counts = service.get_tally(Some("unknown-poll")).await.unwrap();
        assert_eq!((counts.option_a, counts.option_b, counts.total), (0, 0, 0));
    }

    #[tokio::test]
    async fn check_vote_requires_both_params() {
        let service = service();
        assert!(matches!(
            service.check_vote(None, Some("42")).await.unwrap_err(),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            service.check_vote(Some("p1"), None).await.unwrap_err(),
            AppError::ValidationError(_)
        ));
    }
}
