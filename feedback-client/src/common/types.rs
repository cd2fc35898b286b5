use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Góp ý như API trả về.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Body gửi lên `POST /api/feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub message: String,
}
