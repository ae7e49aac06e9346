//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Service or upstream failure
    Service(ServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Service(e) => service_error_response(e),
        };

        (status, Json(error)).into_response()
    }
}

fn service_error_response(err: ServiceError) -> (StatusCode, ApiError) {
    let message = err.to_string();
    match &err {
        ServiceError::Client(client) => {
            let code = format!("UPSTREAM_{}", client.kind().to_uppercase());
            let mut error = ApiError::new(code, message);
            if let Some(status) = client.status() {
                error = error.with_details(format!("upstream status {}", status));
            }
            (StatusCode::BAD_GATEWAY, error)
        }
        ServiceError::InvalidWindow { .. } | ServiceError::InvalidInput(_) => {
            (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", message))
        }
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message)),
        ServiceError::LengthMismatch { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        ),
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Service(err)
    }
}

impl From<crate::client::ClientError> for AppError {
    fn from(err: crate::client::ClientError) -> Self {
        AppError::Service(err.into())
    }
}
