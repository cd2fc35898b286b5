use super::types::FeedbackRecord;

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    FeedbackLoaded(Vec<FeedbackRecord>),
    FeedbackLoadFailed(String),
    SubmitSucceeded(FeedbackRecord),
    SubmitFailed(String),
}
