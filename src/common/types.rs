use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Một góp ý đã được lưu (id và created_at do storage cấp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request body of `POST /api/feedback`, exactly as the client sent it.
///
/// Both fields are optional here; presence is checked when the payload is
/// turned into a [`NewFeedback`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedbackPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Feedback that passed boundary validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub message: String,
}
