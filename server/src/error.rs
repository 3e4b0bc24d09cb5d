//! HTTP mapping for store errors.
//!
//! # Design
//! Handlers return `Result<_, ServerError>` and let `?` lift `TodoError` in.
//! The JSON body is informational only; clients should branch on the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::TodoError;

/// Errors surfaced by route handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Todo(#[from] TodoError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Todo(TodoError::IdsExhausted) => StatusCode::INSUFFICIENT_STORAGE,
            ServerError::Todo(TodoError::DuplicateId(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Todo(TodoError::NotFound(_)) => "NOT_FOUND",
            ServerError::Todo(TodoError::IdsExhausted) => "IDS_EXHAUSTED",
            ServerError::Todo(TodoError::DuplicateId(_)) => "INTERNAL_ERROR",
        }
    }
}

/// JSON body attached to error responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&ServerError> for ErrorBody {
    fn from(err: &ServerError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed");
        (self.status(), Json(ErrorBody::from(&self))).into_response()
    }
}
