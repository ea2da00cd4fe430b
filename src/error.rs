//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server replied outside the success range
    #[error("Server returned status {status}")]
    Api { status: u16 },
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
