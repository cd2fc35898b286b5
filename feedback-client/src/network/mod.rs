pub mod client;

pub use client::FeedbackApiClient;
