use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::response::ApiResponse;

/// Closed set of failure kinds the API can render. Each carries the message
/// shown to the client and maps to exactly one status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Gone(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Gone(_) => StatusCode::GONE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::new(ErrorBody {
            message: self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Decides whether a failure is expected domain feedback or an unexpected
/// fault. A recognized kind passes through with its message unchanged;
/// anything else is logged and surfaced as `Internal`. Domain services route
/// every caught failure through here exactly once.
pub fn translate_error(component: &str, err: anyhow::Error) -> AppError {
    match err.downcast::<AppError>() {
        Ok(known) => known,
        Err(other) => {
            tracing::error!(component, error = %other, "unexpected failure");
            AppError::Internal(other.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
