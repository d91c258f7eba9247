//! Board API error types.

use thiserror::Error;

/// Errors that can occur when talking to the job-board API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The board returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the board.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a board response.
    #[error("parse error: {0}")]
    Parse(String),
}
