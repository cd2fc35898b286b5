use std::sync::Arc;

use crate::service::FeedbackService;

pub struct State {
    pub service: FeedbackService,
}

impl State {
    pub fn new(service: FeedbackService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}
