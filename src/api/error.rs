//! Error types for the question bank API

use thiserror::Error;

/// Errors that can occur when talking to the question bank
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token is stored
    #[error("not signed in. Run `preceptor login <token>` first")]
    TokenNotFound,

    /// Failed to access the system keyring
    #[error("failed to access keyring: {0}")]
    KeyringError(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// API answered 2xx but flagged the request as unsuccessful
    #[error("request rejected: {message}")]
    Rejected {
        /// Reason from the response body, if any
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if retrying the same request can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::RequestError(_) | ApiError::Server { status: 500..=599, .. }
        )
    }

    /// Check if this error requires signing in again
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ApiError::TokenNotFound | ApiError::Server { status: 401, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_recoverable() {
        let err = ApiError::Server { status: 503, message: "maintenance".into() };
        assert!(err.is_recoverable());
    }

    #[test]
    fn client_errors_are_not_recoverable() {
        let err = ApiError::Server { status: 400, message: "bad request".into() };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn unauthorized_requires_reauth() {
        let err = ApiError::Server { status: 401, message: "expired".into() };
        assert!(err.requires_reauth());
        assert!(ApiError::TokenNotFound.requires_reauth());
    }

    #[test]
    fn rejection_is_terminal() {
        let err = ApiError::Rejected { message: "quiz closed".into() };
        assert!(!err.is_recoverable());
        assert!(!err.requires_reauth());
    }
}
