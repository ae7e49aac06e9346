//! Errors raised by the view services.

use crate::client::ClientError;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The upstream request failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Moving-average window of zero positions.
    #[error("Invalid moving-average window {window}: must be at least 1")]
    InvalidWindow { window: usize },

    /// Raw and smoothed series of different lengths.
    #[error("Series length mismatch: {raw} raw points, {smoothed} smoothed points")]
    LengthMismatch { raw: usize, smoothed: usize },

    /// A caller-supplied selector (date, slug) is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested entity is not part of the upstream response.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Client(e) => e.kind(),
            ServiceError::InvalidWindow { .. } | ServiceError::InvalidInput(_) => "invalid_input",
            ServiceError::LengthMismatch { .. } => "internal",
            ServiceError::NotFound(_) => "not_found",
        }
    }
}

/// Reject blank date/slug selectors before any request is made.
pub(crate) fn require_selector<'a>(name: &str, value: &'a str) -> ServiceResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{} must not be empty", name)));
    }
    Ok(trimmed)
}
