//! HTTP tests for the feedback API: router → service → SQLite store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use feedback_board::api::build_router;
use feedback_board::common::{FeedbackRecord, NewFeedback};
use feedback_board::service::FeedbackService;
use feedback_board::storage::{FeedbackDatabase, FeedbackStore, StoreError};

const FEEDBACK: &str = "/api/feedback";

fn test_router() -> (Router, Arc<FeedbackDatabase>) {
    let store = Arc::new(FeedbackDatabase::in_memory().expect("open in-memory store"));
    let router = build_router(FeedbackService::new(store.clone()), &[]);
    (router, store)
}

/// Store whose reads and writes always fail as if the database were gone.
struct UnavailableStore;

impl FeedbackStore for UnavailableStore {
    fn insert(&self, _feedback: NewFeedback) -> Result<FeedbackRecord, StoreError> {
        Err(StoreError::Closed)
    }

    fn find_all_newest_first(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        Err(StoreError::Closed)
    }

    fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Body>,
) -> Result<(StatusCode, Value), String> {
    let mut builder = Request::builder().method(method).uri(uri);

    let req = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder
                .body(body)
                .map_err(|err| format!("build request: {err}"))?
        }
        None => builder
            .body(Body::empty())
            .map_err(|err| format!("build request: {err}"))?,
    };

    let response = router
        .clone()
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .map_err(|err| format!("read response body: {err}"))?;

    let parsed = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|err| format!("parse response body: {err}"))?
    };
    Ok((status, parsed))
}

async fn post_json(router: &Router, payload: Value) -> Result<(StatusCode, Value), String> {
    let bytes = serde_json::to_vec(&payload).map_err(|err| format!("serialize body: {err}"))?;
    request(router, Method::POST, FEEDBACK, Some(Body::from(bytes))).await
}

async fn list(router: &Router) -> Result<Vec<Value>, String> {
    let (status, body) = request(router, Method::GET, FEEDBACK, None).await?;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .cloned()
        .ok_or_else(|| format!("expected array, got {body}"))
}

fn created_at(value: &Value) -> DateTime<Utc> {
    value["createdAt"]
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .expect("createdAt should be an RFC 3339 timestamp")
}

#[tokio::test]
async fn submit_returns_created_record() -> Result<(), String> {
    let (router, _store) = test_router();
    let before = Utc::now();

    let (status, created) = post_json(
        &router,
        json!({
            "name": "Jane Doe",
            "message": "Great service, very responsive support team."
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Jane Doe");
    assert_eq!(
        created["message"],
        "Great service, very responsive support team."
    );
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(created_at(&created).timestamp_millis() >= before.timestamp_millis());
    Ok(())
}

#[tokio::test]
async fn list_after_submit_starts_with_new_record() -> Result<(), String> {
    let (router, _store) = test_router();
    post_json(&router, json!({"name": "Early Bird", "message": "First one in the door."})).await?;

    let (_, created) = post_json(
        &router,
        json!({
            "name": "Jane Doe",
            "message": "Great service, very responsive support team."
        }),
    )
    .await?;

    let records = list(&router).await?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], created["id"]);
    assert_eq!(records[1]["name"], "Early Bird");
    Ok(())
}

#[tokio::test]
async fn list_is_newest_first_and_stable() -> Result<(), String> {
    let (router, _store) = test_router();
    for i in 0..4 {
        let (status, _) = post_json(
            &router,
            json!({"name": format!("user {i}"), "message": format!("feedback number {i}")}),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let first = list(&router).await?;
    let names: Vec<_> = first.iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, vec!["user 3", "user 2", "user 1", "user 0"]);
    for pair in first.windows(2) {
        assert!(created_at(&pair[0]) >= created_at(&pair[1]));
    }

    let second = list(&router).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn empty_store_lists_empty_array() -> Result<(), String> {
    let (router, _store) = test_router();
    let (status, body) = request(&router, Method::GET, FEEDBACK, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn trailing_slash_is_accepted() -> Result<(), String> {
    let (router, _store) = test_router();
    let (status, _) = request(&router, Method::GET, "/api/feedback/", None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn missing_message_is_bad_request() -> Result<(), String> {
    let (router, store) = test_router();
    let (status, body) = post_json(&router, json!({"name": "Jane Doe"})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty());
    assert!(message.contains("message"));
    assert_eq!(store.count().map_err(|err| err.to_string())?, 0);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), String> {
    let (router, _store) = test_router();
    let (status, body) = request(
        &router,
        Method::POST,
        FEEDBACK,
        Some(Body::from("{\"name\": ")),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    Ok(())
}

#[tokio::test]
async fn short_message_is_still_stored() -> Result<(), String> {
    let (router, _store) = test_router();
    let (status, _) = post_json(&router, json!({"name": "Jane", "message": "ok"})).await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn unavailable_store_fails_list_with_500() -> Result<(), String> {
    let router = build_router(FeedbackService::new(Arc::new(UnavailableStore)), &[]);
    let (status, body) = request(&router, Method::GET, FEEDBACK, None).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "feedback store is closed");
    Ok(())
}

#[tokio::test]
async fn unavailable_store_fails_submit_with_400() -> Result<(), String> {
    let router = build_router(FeedbackService::new(Arc::new(UnavailableStore)), &[]);
    let (status, body) = post_json(
        &router,
        json!({"name": "Jane", "message": "this will not be stored"}),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "feedback store is closed");
    Ok(())
}

#[tokio::test]
async fn closed_store_fails_list_with_500() -> Result<(), String> {
    let (router, store) = test_router();
    store.close().map_err(|err| err.to_string())?;

    let (status, body) = request(&router, Method::GET, FEEDBACK, None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    Ok(())
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_by_default() -> Result<(), String> {
    let (router, _store) = test_router();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(FEEDBACK)
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .map_err(|err| format!("build request: {err}"))?;

    let response = router
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}

async fn preflight_allow_origin(router: Router, origin: &str) -> Result<Option<String>, String> {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(FEEDBACK)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .map_err(|err| format!("build request: {err}"))?;

    let response = router
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;

    Ok(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string))
}

#[tokio::test]
async fn cors_preflight_honours_configured_origins() -> Result<(), String> {
    let store = Arc::new(FeedbackDatabase::in_memory().map_err(|err| err.to_string())?);
    let router = build_router(
        FeedbackService::new(store),
        // the second entry is not a valid header value and is skipped
        &["http://allowed.test".into(), "bad\norigin".into()],
    );

    assert_eq!(
        preflight_allow_origin(router.clone(), "http://allowed.test").await?,
        Some("http://allowed.test".to_string())
    );
    assert_eq!(
        preflight_allow_origin(router, "http://denied.test").await?,
        None
    );
    Ok(())
}
