//! Error handling
//!
//! Every failure leaves the server as `{"error": message, "status": code}`.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use risk_core::{InferenceError, RiskError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Engine errors
    #[error(transparent)]
    Risk(#[from] RiskError),

    // Routing errors
    #[error("{0}")]
    NotFound(String),

    // Validation errors
    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Risk(RiskError::ModelUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Risk(RiskError::MalformedInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Risk(RiskError::InferenceFailure {
                source: InferenceError::NonFiniteInput { .. },
                ..
            }) => StatusCode::BAD_REQUEST,
            AppError::Risk(RiskError::InferenceFailure { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), message);
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Risk(RiskError::MalformedInput(rejection.body_text()))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}
