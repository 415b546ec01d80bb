//! The normalized result of a Cashramp API call.
//!
//! Every call made through [`Cashramp`](crate::Cashramp) produces exactly one
//! [`CashrampResponse`]: either the payload the API returned for the
//! requested field, or a human-readable error message.
//!
//! # Normalization Rules
//!
//! Given the decoded body and the operation name:
//!
//! 1. If `errors` is a non-empty array, the call failed and the message of
//!    the first error is reported, whatever `data` contains.
//! 2. Otherwise the call succeeded and the result is `data[name]`, passed
//!    through unchanged (`null` when the field or `data` is missing).
//!
//! Transport and decoding failures are folded into the failure shape by the
//! client, so callers never have to handle a raised error per call.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Message used when a failure carries no usable text.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// The outcome of a Cashramp API call.
///
/// Serializes to `{"success": true, "result": ...}` or
/// `{"success": false, "error": "..."}`.
///
/// # Example
///
/// ```rust
/// use cashramp::CashrampResponse;
/// use serde_json::json;
///
/// let body = json!({ "data": { "account": { "accountBalance": "10" } } });
/// let response = CashrampResponse::from_graphql_body("account", &body);
///
/// assert!(response.is_success());
/// assert_eq!(response.result(), Some(&json!({ "accountBalance": "10" })));
///
/// let body = json!({ "errors": [{ "message": "Your account has been restricted." }] });
/// let response = CashrampResponse::from_graphql_body("account", &body);
///
/// assert_eq!(response.error(), Some("Your account has been restricted."));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum CashrampResponse {
    /// The API returned a value for the requested field.
    Success {
        /// The value of `data[name]`, exactly as returned.
        result: Value,
    },
    /// The API reported an error, or the request never completed.
    Failure {
        /// A human-readable description of what went wrong.
        error: String,
    },
}

impl CashrampResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn success(result: Value) -> Self {
        Self::Success { result }
    }

    /// Creates a failure response for a request that never produced a usable
    /// body, substituting [`GENERIC_ERROR_MESSAGE`] for an empty message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        if error.is_empty() {
            return Self::Failure {
                error: GENERIC_ERROR_MESSAGE.to_string(),
            };
        }
        Self::Failure { error }
    }

    /// Normalizes a decoded GraphQL response body for the field `name`.
    #[must_use]
    pub fn from_graphql_body(name: &str, body: &Value) -> Self {
        if let Some(first) = body
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
        {
            let error = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string();
            return Self::Failure { error };
        }

        let result = body
            .get("data")
            .and_then(|data| data.get(name))
            .cloned()
            .unwrap_or(Value::Null);
        Self::success(result)
    }

    /// Returns `true` if the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the result of a successful call.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match self {
            Self::Success { result } => Some(result),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error message of a failed call.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error.as_str()),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error message if the call failed.
    pub fn into_result(self) -> Result<Value, String> {
        match self {
            Self::Success { result } => Ok(result),
            Self::Failure { error } => Err(error),
        }
    }
}

impl Serialize for CashrampResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Success { result } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("result", result)?;
            }
            Self::Failure { error } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
