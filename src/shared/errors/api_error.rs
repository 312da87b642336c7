use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::app_error::AppError;
use crate::log_warn;
use crate::shared::utils::logger::LogContext;

/// Body sent with 4xx/5xx responses that carry a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidInput(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_)
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // 404s carry no payload at all
            AppError::NotFound(_) => status.into_response(),
            AppError::Forbidden(message)
            | AppError::InvalidInput(message)
            | AppError::ValidationError(message)
            | AppError::Unauthorized(message) => {
                (status, Json(ErrorBody::new(message))).into_response()
            }
            AppError::ServiceUnavailable(message) => {
                log_warn!("Service unavailable: {}", message);
                (status, Json(ErrorBody::new(message))).into_response()
            }
            other => {
                LogContext::error_with_context(&other, "Request failed");
                (status, Json(ErrorBody::new("Internal server error"))).into_response()
            }
        }
    }
}
