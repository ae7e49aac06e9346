//! Error types for upstream API calls.

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a single upstream request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The transport failed: unreachable host, refused connection, timeout,
    /// or a body that could not be read.
    #[error("Network error for {url}: {message}")]
    NetworkError { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    RequestFailed { status: u16, url: String },

    /// The body is not JSON or does not match the endpoint schema.
    #[error("Invalid response from {url}: {message}")]
    ParseError { url: String, message: String },

    /// The client could not be constructed or a URL could not be formed.
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn network(url: impl Into<String>, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out ({})", err)
        } else if err.is_connect() {
            format!("connection failed ({})", err)
        } else {
            err.to_string()
        };
        Self::NetworkError {
            url: url.into(),
            message,
        }
    }

    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::NetworkError { .. } => "network",
            ClientError::RequestFailed { .. } => "request_failed",
            ClientError::ParseError { .. } => "parse",
            ClientError::Config(_) => "config",
        }
    }

    /// HTTP status for [`ClientError::RequestFailed`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL the failed request was sent to, when one was formed.
    pub fn url(&self) -> Option<&str> {
        match self {
            ClientError::NetworkError { url, .. }
            | ClientError::RequestFailed { url, .. }
            | ClientError::ParseError { url, .. } => Some(url),
            ClientError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let err = ClientError::RequestFailed {
            status: 500,
            url: "http://api.local/days".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 for http://api.local/days");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.kind(), "request_failed");
        assert_eq!(err.url(), Some("http://api.local/days"));
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = ClientError::ParseError {
            url: "http://api.local/metrics".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_config_error_has_no_url() {
        let err = ClientError::Config("bad base".to_string());
        assert_eq!(err.url(), None);
        assert!(err.to_string().contains("bad base"));
    }
}
