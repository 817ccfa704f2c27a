use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use skillcheck_core::error::CoreError;
use skillcheck_db::store::StoreError;

/// Application-level error type for HTTP handlers and services.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `skillcheck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Absent records answer with a bare 404.
                CoreError::NotFound { .. } | CoreError::NotFoundByKey { .. } => {
                    tracing::debug!(error = %core, "Not found");
                    return StatusCode::NOT_FOUND.into_response();
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Store errors ---
            AppError::Store(StoreError::UniqueViolation { constraint }) => {
                classify_unique_violation(constraint)
            }
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Named unique constraints (`uq_` prefix) map to 409; anything else is
/// unexpected and maps to 500.
fn classify_unique_violation(constraint: &str) -> (StatusCode, &'static str, String) {
    if constraint.starts_with("uq_") {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        );
    }
    tracing::error!(constraint, "Unexpected unique violation");
    internal()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
