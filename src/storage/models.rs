use chrono::{DateTime, Utc};

use crate::common::FeedbackRecord;

use super::StoreError;

/// Feedback row as laid out in the `feedback` table
#[derive(Debug, Clone)]
pub struct FeedbackRow {
    pub id: String,
    pub name: String,
    pub message: String,
    /// Unix epoch milliseconds
    pub created_at: i64,
}

impl TryFrom<FeedbackRow> for FeedbackRecord {
    type Error = StoreError;

    fn try_from(row: FeedbackRow) -> Result<Self, Self::Error> {
        let created_at = DateTime::<Utc>::from_timestamp_millis(row.created_at).ok_or_else(|| {
            StoreError::Corrupt(format!(
                "feedback {} has out-of-range created_at {}",
                row.id, row.created_at
            ))
        })?;

        Ok(FeedbackRecord {
            id: row.id,
            name: row.name,
            message: row.message,
            created_at,
        })
    }
}
