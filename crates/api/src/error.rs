use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use villain_core::error::CoreError;
use villain_core::messages;

use crate::response::OutcomeResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`] so every failure renders as an
/// `{"errors": [...]}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `villain_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            // Validation, duplicate and not-found outcomes are ordinary
            // answers for the pages, so they ride the 200 channel.
            AppError::Core(core) => match core.user_messages() {
                Some(msgs) => (StatusCode::OK, msgs),
                None => {
                    tracing::error!(error = %core, "Internal core error");
                    internal()
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
        };

        (status, axum::Json(OutcomeResponse::errors(errors))).into_response()
    }
}

fn internal() -> (StatusCode, Vec<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        vec![messages::INTERNAL_ERROR.to_string()],
    )
}
