//! HTTP request handlers

use super::types::{ErrorResponse, HealthResponse, VersionResponse};
use super::AppState;
use crate::lex::{DialogResponse, LexEvent};
use crate::runtime::DispatchError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One dialog turn per request
        .route("/lex/code-hook", post(code_hook))
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Code Hook
// ============================================================

async fn code_hook(
    State(state): State<AppState>,
    Json(event): Json<LexEvent>,
) -> Result<Json<DialogResponse>, AppError> {
    let user_id = event.user_id.clone();
    state.runtime.dispatch(event).await.map(Json).map_err(|e| {
        tracing::error!(user_id = %user_id, error = %e, "Turn failed");
        AppError::from(e)
    })
}

// ============================================================
// Service Info
// ============================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
