//! Submit/list operations over an injected [`FeedbackStore`].

use std::sync::Arc;

use thiserror::Error;

use crate::common::{FeedbackPayload, FeedbackRecord, NewFeedback, ValidationError};
use crate::storage::{FeedbackStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn FeedbackStore> {
        &self.store
    }

    /// Validate the payload and persist it, returning the stored record.
    pub async fn submit(&self, payload: FeedbackPayload) -> Result<FeedbackRecord, ServiceError> {
        let feedback = NewFeedback::try_from(payload)?;
        let store = self.store.clone();
        let record = tokio::task::spawn_blocking(move || store.insert(feedback)).await??;
        Ok(record)
    }

    /// Every stored record, newest first.
    pub async fn list(&self) -> Result<Vec<FeedbackRecord>, ServiceError> {
        let store = self.store.clone();
        let records = tokio::task::spawn_blocking(move || store.find_all_newest_first()).await??;
        Ok(records)
    }
}
