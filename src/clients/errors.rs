//! Transport error types for the Cashramp SDK.
//!
//! These errors describe why a request never produced a usable JSON body.
//! They stay inside the crate's public dispatch boundary: the client turns
//! them into a failure [`CashrampResponse`](crate::CashrampResponse) using
//! their `Display` text.

use thiserror::Error;

/// Error returned when a request could not be completed or decoded.
///
/// # Example
///
/// ```rust
/// use cashramp::clients::HttpError;
///
/// let parse_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
/// let error = HttpError::from(parse_error);
/// assert!(error.to_string().starts_with("Invalid JSON response"));
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error (DNS, refused connection, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
