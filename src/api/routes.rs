use std::sync::Arc;

use axum::{
    Json,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
};

use crate::common::{FeedbackPayload, FeedbackRecord};

use super::{error::ApiError, state::State};

pub async fn list_feedback_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    match state.service.list().await {
        Ok(records) => {
            log::debug!("Listing {} feedback records", records.len());
            Ok(Json(records))
        }
        Err(err) => {
            log::error!("Failed to list feedback: {err}");
            Err(ApiError::Internal(err.to_string()))
        }
    }
}

pub async fn submit_feedback_handler(
    AxumState(state): AxumState<Arc<State>>,
    payload: Result<Json<FeedbackPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        log::warn!("Rejected feedback body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    match state.service.submit(payload).await {
        Ok(record) => {
            log::info!("Stored feedback {} from {}", record.id, record.name);
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(err) => {
            log::warn!("Failed to store feedback: {err}");
            Err(ApiError::BadRequest(err.to_string()))
        }
    }
}
