//! HTTP surface: `GET` / `POST` on `/api/feedback`.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use routes::{list_feedback_handler, submit_feedback_handler};
use state::State;

use crate::config::AppConfig;
use crate::service::FeedbackService;

pub const FEEDBACK_PATH: &str = "/api/feedback";

pub fn build_router(service: FeedbackService, allowed_origins: &[String]) -> Router {
    let state = State::new(service);

    Router::new()
        .route(
            FEEDBACK_PATH,
            get(list_feedback_handler).post(submit_feedback_handler),
        )
        .route(
            "/api/feedback/",
            get(list_feedback_handler).post(submit_feedback_handler),
        )
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring invalid CORS origin `{origin}`: {err}");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Bind the configured port and serve until Ctrl+C / SIGTERM.
pub async fn serve(config: &AppConfig, service: FeedbackService) -> std::io::Result<()> {
    let app = build_router(service, &config.allowed_origins);

    let address = config.listen_address();
    log::info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    log::info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }

        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                log::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
