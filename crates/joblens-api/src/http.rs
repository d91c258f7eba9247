//! Shared HTTP response helpers for the board client.
//!
//! Centralizes the status-code check (non-success → [`ApiError::Api`]) so
//! the endpoint methods stay focused on request construction and response
//! mapping.

use crate::error::ApiError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success; a non-success status becomes
/// [`ApiError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
