//! JSON error responses.

use crate::reconcile::ReconcileError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Builds the `{ "error": code, "message": text }` body used by every failing route.
pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[derive(Debug)]
pub struct ApiError(pub ReconcileError);

impl From<ReconcileError> for ApiError {
    fn from(e: ReconcileError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self(ReconcileError::Validation(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self(ReconcileError::NotFound(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            ReconcileError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ReconcileError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ReconcileError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ReconcileError::Persistence(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        json_error(status, code, self.0.to_string())
    }
}
