//! HTTP Server
//!
//! JSON API over the summarizer:
//! - `POST /summarize` with `{"github_url": "..."}` returns a summary
//! - `GET /health` returns `{"status": "ok"}`
//!
//! Failures are reported as `{"status": "error", "message": "..."}` with the
//! status code of the error category.

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::summarizer::RepoSummarizer;
use crate::types::{LensError, Result};

/// Request body of `POST /summarize`
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub github_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    summarizer: RepoSummarizer,
}

impl AppState {
    pub fn new(summarizer: RepoSummarizer) -> Self {
        Self { summarizer }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/summarize",
            post({
                let state = state.clone();
                move |body| summarize_handler(body, state.clone())
            }),
        )
        .route("/health", get(health_handler))
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(summarizer: RepoSummarizer, addr: &str) -> Result<()> {
    let app = router(Arc::new(AppState::new(summarizer)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Serving summaries on http://{}/summarize", local_addr);
    info!("Health endpoint: http://{}/health", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn summarize_handler(
    body: Bytes,
    state: Arc<AppState>,
) -> std::result::Result<Response, StatusCode> {
    let request: SummarizeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            let error = ErrorBody::new(format!("Invalid request body: {}", err));
            return build_response(StatusCode::UNPROCESSABLE_ENTITY, &error);
        }
    };

    match state.summarizer.summarize(&request.github_url).await {
        Ok(summary) => build_response(StatusCode::OK, &summary),
        Err(err) => error_response(&err),
    }
}

pub async fn health_handler() -> std::result::Result<Response, StatusCode> {
    build_response(StatusCode::OK, &serde_json::json!({"status": "ok"}))
}

/// Error body and status for a failed summary
pub fn error_response(err: &LensError) -> std::result::Result<Response, StatusCode> {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!("Summary failed ({}): {}", err.category(), err);
    } else {
        info!("Summary rejected ({}): {}", err.category(), err);
    }
    build_response(status, &ErrorBody::new(err.to_string()))
}

fn build_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> std::result::Result<Response, StatusCode> {
    let bytes = serde_json::to_vec(body).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
