use serde::{Deserialize, Serialize};

/// The two mutually exclusive choices of a poll. Serialized as `"A"` / `"B"`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VoteOption {
    A,
    B,
}

impl VoteOption {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "A" => Some(VoteOption::A),
            "B" => Some(VoteOption::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteOption::A => "A",
            VoteOption::B => "B",
        }
    }
}

/// One user's immutable choice for one poll. At most one exists per
/// (poll_id, user_fid) pair.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub poll_id: String,

    /// Verified Farcaster id supplied by the external auth collaborator.
    pub user_fid: i64,

    pub option: VoteOption,

    /// Milliseconds since epoch, assigned by the store at insert time.
    pub timestamp: i64,
}

/// Aggregate counts for one poll, derived on demand and never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub option_a: u64,
    pub option_b: u64,
    pub total: u64,
}
