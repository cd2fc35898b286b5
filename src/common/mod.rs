pub mod types;
pub mod validation;

pub use types::{FeedbackPayload, FeedbackRecord, NewFeedback};
pub use validation::ValidationError;
