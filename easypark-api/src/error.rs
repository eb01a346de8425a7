use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use easypark_domain::time::TimeError;
use easypark_engine::ReservationError;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    AuthorizationError(String),
    ValidationError(String),
    NotFoundError(String),
    BusinessRuleError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::AuthorizationError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BusinessRuleError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match &err {
            ReservationError::MallNotFound(_)
            | ReservationError::SlotNotFound(_)
            | ReservationError::ReservationNotFound(_) => AppError::NotFoundError(err.to_string()),
            ReservationError::SlotUnavailable(_)
            | ReservationError::TimeConflict(_)
            | ReservationError::InvalidState { .. } => AppError::BusinessRuleError(err.to_string()),
            ReservationError::Forbidden => AppError::AuthorizationError(err.to_string()),
            ReservationError::Time(_) => AppError::ValidationError(err.to_string()),
            ReservationError::Inventory(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TimeError> for AppError {
    fn from(err: TimeError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
