use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire shape is `{ "error": "<message>" }` with a non-2xx status.
/// Only transport/provider failures surface to the end user as hard errors;
/// response-parsing failures in the analyzer flows degrade to fallback
/// objects instead of reaching this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI provider unreachable: {0}")]
    ProviderUnavailable(String),

    #[error("AI provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("AI provider returned an empty response")]
    EmptyResponse,

    #[error("Failed to parse generated content")]
    Unparseable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Unavailable(e) => AppError::ProviderUnavailable(e.to_string()),
            LlmError::Api { status, message } => AppError::Provider { status, message },
            LlmError::EmptyContent => AppError::EmptyResponse,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ProviderUnavailable(msg) => {
                tracing::error!("Provider unreachable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AI provider is unreachable".to_string(),
                )
            }
            AppError::Provider { status, message } => {
                tracing::error!("Provider error ({status}): {message}");
                (StatusCode::BAD_GATEWAY, message.clone())
            }
            AppError::EmptyResponse => (
                StatusCode::BAD_GATEWAY,
                "AI provider returned an empty response".to_string(),
            ),
            AppError::Unparseable => (
                StatusCode::BAD_GATEWAY,
                "Failed to parse generated content".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
