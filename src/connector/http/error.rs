use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;

/// Error body for failures that reach the HTTP boundary.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { detail })).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "General error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
            }
        }
    }
}
