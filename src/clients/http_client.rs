//! HTTP client for Cashramp API communication.
//!
//! This module provides the [`HttpClient`] type for sending authenticated
//! JSON requests to a single Cashramp GraphQL endpoint.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::config::SecretKey;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A decoded response from the Cashramp API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Returns `true` for a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

/// HTTP client bound to one Cashramp endpoint.
///
/// The client handles:
/// - Default headers including `Authorization` and `User-Agent`
/// - JSON serialization of the request body
/// - JSON decoding of the response body
///
/// It makes exactly one attempt per call and keeps no state between calls
/// beyond the underlying connection pool.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, and clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full URL every request is posted to.
    endpoint: String,
    /// Headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client that posts to `endpoint` with `secret_key`
    /// as its bearer token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashramp::SecretKey;
    /// use cashramp::clients::HttpClient;
    ///
    /// let key = SecretKey::new("CSHRMP-SECK-123").unwrap();
    /// let client = HttpClient::new("https://api.useaccrue.com/cashramp/api/graphql", &key);
    ///
    /// assert_eq!(
    ///     client.default_headers().get("Authorization").map(String::as_str),
    ///     Some("Bearer CSHRMP-SECK-123")
    /// );
    /// ```
    #[must_use]
    pub fn new(endpoint: impl Into<String>, secret_key: &SecretKey) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Cashramp Rust Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), secret_key.bearer());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            default_headers,
        }
    }

    /// Returns the URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts `body` as JSON and decodes the JSON response.
    ///
    /// The status code is returned alongside the body but does not by itself
    /// make the call fail; a non-2xx status is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or the
    /// body cannot be read, and [`HttpError::InvalidJson`] if the request
    /// cannot be serialized or the response is not JSON.
    pub async fn post_json<B>(&self, body: &B) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(body)?;

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(payload).send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;

        let response = HttpResponse {
            code,
            body: serde_json::from_str(&body_text)?,
        };

        if !response.is_ok() {
            tracing::warn!(
                "Cashramp API at {} responded with status {}",
                self.endpoint,
                code
            );
        }

        Ok(response)
    }
}
