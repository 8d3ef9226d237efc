//! Error taxonomy shared by every route.
//!
//! Variants keep their diagnostic detail for the logs, while the response body
//! is one of four fixed payloads keyed by status code.

use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Well-formed request that can not be acted on.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) | ApiError::Persistence(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Static label used in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::NotFound(_) => "not_found",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::Persistence(_) => "persistence",
            ApiError::Internal(_) => "internal",
        }
    }
}

fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}

fn error_response(status: StatusCode) -> Response {
    let body = ErrorBody {
        success: false,
        error: status.as_u16(),
        message: message_for(status),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Persistence(_) | ApiError::Internal(_) => {
                tracing::error!(code = self.error_code(), "{self}")
            }
            _ => tracing::debug!(code = self.error_code(), "{self}"),
        }
        error_response(self.status())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::Unprocessable(err.body_text()),
            other => ApiError::Validation(other.body_text()),
        }
    }
}

// a path segment that does not parse means the route itself does not exist
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_owned()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
