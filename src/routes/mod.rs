pub mod poll_routes;
pub mod vote_routes;
