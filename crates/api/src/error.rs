//! Error type for the Books REST client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the REST client.
///
/// `Transport` covers connection, timeout, and body-decoding problems;
/// `Status` covers requests the backend answered with a non-success code.
/// Callers collapse both into their own user-facing message and keep this
/// type for the log stream.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },
}

impl ApiError {
    /// Wrap a reqwest failure with the endpoint it was addressed to.
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Record a non-success response status.
    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Endpoint the failing request was addressed to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. } | Self::Status { endpoint, .. } => endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_endpoint_and_code() {
        let err = ApiError::status("http://localhost/books/1", StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "http://localhost/books/1 returned 404 Not Found"
        );
    }

    #[test]
    fn endpoint_accessor_returns_target() {
        let err = ApiError::status("http://localhost/books", StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.endpoint(), "http://localhost/books");
    }
}
