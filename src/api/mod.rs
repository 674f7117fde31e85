//! Question bank API integration
//!
//! Provides access-token management, the HTTP client for the start and
//! submit collaborators, and the wire models their endpoints speak.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use auth::AccessTokenStore;
pub use client::{ApiClient, StartedQuiz};
pub use error::ApiError;
