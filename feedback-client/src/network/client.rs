use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, FeedbackRecord, FeedbackSubmission};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {message}")]
    Rejected { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Worker gọi Feedback API; nhận lệnh từ UI, trả kết quả qua event.
pub struct FeedbackApiClient {
    http: Client,
    endpoint: String,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl FeedbackApiClient {
    pub fn new(
        endpoint: String,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("API worker started for {}", self.endpoint);

        while let Some(command) = self.command_receiver.recv().await {
            let event = self.handle_command(command).await;
            if let Err(err) = self.event_sender.send(event).await {
                log::warn!("UI is gone, stopping API worker: {err}");
                break;
            }
        }

        log::info!("API worker stopped");
    }

    async fn handle_command(&self, command: ApiCommand) -> ApiEvent {
        match command {
            ApiCommand::FetchFeedback => match self.fetch_feedback().await {
                Ok(records) => ApiEvent::FeedbackLoaded(records),
                Err(err) => {
                    log::error!("Error fetching feedback: {err}");
                    ApiEvent::FeedbackLoadFailed(err.to_string())
                }
            },
            ApiCommand::SubmitFeedback { name, message } => {
                match self.submit_feedback(FeedbackSubmission { name, message }).await {
                    Ok(record) => ApiEvent::SubmitSucceeded(record),
                    Err(err) => {
                        log::error!("Error submitting feedback: {err}");
                        ApiEvent::SubmitFailed(err.to_string())
                    }
                }
            }
        }
    }

    pub async fn fetch_feedback(&self) -> Result<Vec<FeedbackRecord>, ApiClientError> {
        let response = self.http.get(&self.endpoint).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn submit_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, ApiClientError> {
        let response = self.http.post(&self.endpoint).json(&submission).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ApiClientError::Rejected {
        status,
        message: error_message(&text),
    })
}

/// Pull `message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_field() {
        assert_eq!(
            error_message(r#"{"message":"Feedback validation failed: message: message is required"}"#),
            "Feedback validation failed: message: message is required"
        );
    }

    #[test]
    fn error_message_falls_back_to_text() {
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn unreachable_server_reports_load_failure() {
        let (_cmd_tx, cmd_rx) = mpsc::channel(1);
        let (event_tx, _event_rx) = mpsc::channel(1);
        // Port 9 (discard) is not expected to run an HTTP server.
        let client = FeedbackApiClient::new(
            "http://127.0.0.1:9/api/feedback".to_string(),
            event_tx,
            cmd_rx,
        );

        let event = client.handle_command(ApiCommand::FetchFeedback).await;
        assert!(matches!(event, ApiEvent::FeedbackLoadFailed(_)));
    }
}
