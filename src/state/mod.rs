use crate::services::VoteService;

#[derive(Clone)]
pub struct AppState {
    pub service: VoteService,
}

impl AppState {
    pub fn new(service: VoteService) -> Self {
        Self { service }
    }
}
