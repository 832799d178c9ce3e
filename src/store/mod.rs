use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::vote_models::{Tally, Vote, VoteOption};

/// In-memory vote collection. Append-only: votes are never mutated or
/// deleted, and the collection lives exactly as long as the process.
#[derive(Debug, Default)]
pub struct VoteStore {
    votes: RwLock<Vec<Vote>>,
}

impl VoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vote cast by `user_fid` on `poll_id`, if any. Deterministic:
    /// repeated calls with the same arguments return the same value.
    pub async fn has_voted(&self, poll_id: &str, user_fid: i64) -> Option<Vote> {
        let votes = self.votes.read().await;
        votes
            .iter()
            .find(|vote| vote.poll_id == poll_id && vote.user_fid == user_fid)
            .cloned()
    }

    /// Unconditional append. Does not check for duplicates; callers that
    /// need the one-vote-per-user guarantee go through `try_insert`.
    pub async fn record(&self, vote: Vote) {
        self.votes.write().await.push(vote);
    }

    /// Atomic check-and-record: holds the write lock across the existence
    /// check and the append, so two concurrent casts for the same
    /// (poll_id, user_fid) cannot both succeed. Assigns the timestamp at
    /// insert time. Returns the already-recorded vote on duplicate.
    pub async fn try_insert(
        &self,
        poll_id: &str,
        user_fid: i64,
        option: VoteOption,
    ) -> Result<Vote, Vote> {
        let mut votes = self.votes.write().await;

        if let Some(existing) = votes
            .iter()
            .find(|vote| vote.poll_id == poll_id && vote.user_fid == user_fid)
        {
            return Err(existing.clone());
        }

        let vote = Vote {
            poll_id: poll_id.to_string(),
            user_fid,
            option,
            timestamp: Utc::now().timestamp_millis(),
        };
        votes.push(vote.clone());
        Ok(vote)
    }

    /// Counts for one poll, recomputed from the vote set. A poll id with no
    /// votes yields the zero tally. O(total votes).
    pub async fn tally(&self, poll_id: &str) -> Tally {
        let votes = self.votes.read().await;

        let mut option_a = 0u64;
        let mut option_b = 0u64;
        for vote in votes.iter().filter(|vote| vote.poll_id == poll_id) {
            match vote.option {
                VoteOption::A => option_a += 1,
                VoteOption::B => option_b += 1,
            }
        }

        Tally {
            option_a,
            option_b,
            total: option_a + option_b,
        }
    }

    /// Total number of recorded votes across all polls.
    pub async fn len(&self) -> usize {
        self.votes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.votes.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn has_voted_is_none_on_an_empty_store() {
        let store = VoteStore::new();
        assert!(store.has_voted("p1", 42).await.is_none());
    }

    #[tokio::test]
    async fn has_voted_returns_the_recorded_vote() {
        let store = VoteStore::new();
        let vote = Vote {
            poll_id: "p1".to_string(),
            user_fid: 42,
            option: VoteOption::A,
            timestamp: 1_700_000_000_000,
        };
        store.record(vote.clone()).await;

        assert_eq!(store.has_voted("p1", 42).await, Some(vote.clone()));
        // Same arguments, same value.
        assert_eq!(store.has_voted("p1", 42).await, Some(vote));
        assert!(store.has_voted("p1", 7).await.is_none());
        assert!(store.has_voted("p2", 42).await.is_none());
    }

    #[tokio::test]
    async fn try_insert_rejects_a_second_vote_for_the_same_key() {
        let store = VoteStore::new();

        let first = store.try_insert("p1", 42, VoteOption::A).await.unwrap();
        assert_eq!(first.option, VoteOption::A);

        let rejected = store.try_insert("p1", 42, VoteOption::B).await.unwrap_err();
        assert_eq!(rejected, first);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn tally_counts_only_the_requested_poll() {
        let store = VoteStore::new();
        store.try_insert("p1", 1, VoteOption::A).await.unwrap();
        store.try_insert("p1", 2, VoteOption::A).await.unwrap();
        store.try_insert("p1", 3, VoteOption::B).await.unwrap();
        store.try_insert("p2", 1, VoteOption::B).await.unwrap();

        let tally = store.tally("p1").await;
        assert_eq!(tally.option_a, 2);
        assert_eq!(tally.option_b, 1);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.option_a + tally.option_b, tally.total);
    }

    #[tokio::test]
    async fn tally_of_an_unknown_poll_is_zero() {
        let store = VoteStore::new();
        assert_eq!(store.tally("unknown-poll").await, Tally::default());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_casts_for_one_key_yield_exactly_one_vote() {
        let store = Arc::new(VoteStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                let option = if i % 2 == 0 { VoteOption::A } else { VoteOption::B };
                tokio::spawn(async move { store.try_insert("p1", 42, option).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.tally("p1").await.total, 1);
    }
}
