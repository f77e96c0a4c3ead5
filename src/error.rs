//! The recoverable error taxonomy surfaced to feature state.
//!
//! Every `...Done` action carries `Result<_, AppError>`. Reducers branch on
//! it like any other payload; nothing here is fatal.

use thiserror::Error;

/// Typed failure of a collaborator operation.
///
/// Clone + PartialEq because errors travel inside actions and state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("failed to decode response: {0}")]
    Parse(String),

    #[error("resource not found")]
    NotFound,

    #[error("not signed in")]
    Unauthorized,

    #[error("storage operation failed: {0}")]
    Database(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::Parse(err.to_string())
        } else if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            AppError::NotFound
        } else if err.status() == Some(reqwest::StatusCode::UNAUTHORIZED) {
            AppError::Unauthorized
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
