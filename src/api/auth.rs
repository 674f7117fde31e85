//! Access-token storage using the system keyring

use keyring::Entry;

use super::error::ApiError;

/// Service name for keyring storage
const SERVICE_NAME: &str = "preceptor";
/// Entry name for the access token
const TOKEN_ENTRY: &str = "access-token";

/// Manages question bank access-token storage in the system keyring
pub struct AccessTokenStore;

impl AccessTokenStore {
    /// Get the access token from the system keyring
    pub fn get_token() -> Result<String, ApiError> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_ENTRY)
            .map_err(|e| ApiError::KeyringError(e.to_string()))?;

        entry.get_password().map_err(|e| match e {
            keyring::Error::NoEntry => ApiError::TokenNotFound,
            _ => ApiError::KeyringError(e.to_string()),
        })
    }

    /// Store the access token in the system keyring
    pub fn set_token(token: &str) -> Result<(), ApiError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::Rejected { message: "access token is empty".into() });
        }

        let entry = Entry::new(SERVICE_NAME, TOKEN_ENTRY)
            .map_err(|e| ApiError::KeyringError(e.to_string()))?;

        entry.set_password(token).map_err(|e| ApiError::KeyringError(e.to_string()))
    }

    /// Check if an access token is stored
    pub fn is_logged_in() -> bool {
        Self::get_token().is_ok()
    }

    /// Delete the stored access token
    pub fn clear_token() -> Result<(), ApiError> {
        let entry = Entry::new(SERVICE_NAME, TOKEN_ENTRY)
            .map_err(|e| ApiError::KeyringError(e.to_string()))?;

        entry.delete_credential().map_err(|e| ApiError::KeyringError(e.to_string()))
    }

    /// Mask a token for display (show first and last 4 chars)
    pub fn mask_token(token: &str) -> String {
        if token.len() <= 12 {
            return "*".repeat(token.len());
        }
        let prefix = &token[..4];
        let suffix = &token[token.len() - 4..];
        format!("{}...{}", prefix, suffix)
    }
}
