pub mod cast_vote;
pub mod check_vote;
pub mod get_tally;
pub mod models;
