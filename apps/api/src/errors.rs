#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::import::ImportError;
use crate::document::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rejected document update: {0}")]
    Document(#[from] DocumentError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Assistant error: {0}")]
    Assistant(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Document(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_ERROR",
                e.to_string(),
            ),
            AppError::Import(e) => (StatusCode::BAD_REQUEST, "IMPORT_ERROR", e.to_string()),
            AppError::Assistant(msg) => {
                tracing::error!("Assistant error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASSISTANT_ERROR",
                    "The writing assistant is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
