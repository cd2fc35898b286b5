pub mod database;
pub mod feedback_db;
pub mod models;

pub use feedback_db::FeedbackDatabase;

use std::fs;
use std::path::Path;

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::common::{FeedbackRecord, NewFeedback};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The write violated a schema constraint.
    #[error("{0}")]
    Rejected(String),

    #[error("feedback store is closed")]
    Closed,

    #[error("feedback store lock poisoned")]
    Poisoned,

    #[error("corrupt feedback row: {0}")]
    Corrupt(String),

    #[error("sqlite error: {0}")]
    Sqlite(#[source] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::Rejected(err.to_string()),
            _ => StoreError::Sqlite(err),
        }
    }
}

/// Durable, timestamp-ordered persistence for feedback records.
pub trait FeedbackStore: Send + Sync {
    /// Stores new feedback, assigning its id and creation time.
    fn insert(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StoreError>;

    /// All stored feedback, newest first.
    fn find_all_newest_first(&self) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Ends the store's lifecycle. Later calls fail with [`StoreError::Closed`].
    fn close(&self) -> Result<(), StoreError>;
}

/// Ensure the directory holding a database file exists
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
