//! Error types for the StackView frontend.

use thiserror::Error;

/// Everything the error view can display: configuration problems caught
/// before any request goes out, and per-endpoint fetch failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("No API base URL configured. Please check your environment variables.")]
    MissingBaseUrl,

    #[error("Invalid API base URL: {value}")]
    InvalidBaseUrl { value: String },

    #[error("API call failed: {endpoint} (Status: {status})")]
    Http { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {detail}")]
    Network { endpoint: String, detail: String },

    #[error("Invalid response from {endpoint}: {detail}")]
    Decode { endpoint: String, detail: String },
}

impl AppError {
    /// Configuration errors require fixing the environment and reloading;
    /// everything else is retriable by reloading once the backend is up.
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::MissingBaseUrl | AppError::InvalidBaseUrl { .. })
    }
}
