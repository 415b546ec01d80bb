//! HTTP transport for Cashramp API communication.
//!
//! This module provides the low-level layer used by
//! [`Cashramp`](crate::Cashramp): one authenticated JSON POST per call, with
//! the response body decoded into a [`serde_json::Value`].
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to a single endpoint
//! - [`HttpError`]: Network and decoding failures
//!
//! # No Retries
//!
//! Every call makes exactly one attempt. There is no timeout, retry, or
//! backoff policy; callers that need one can wrap the returned future.

mod errors;
mod http_client;

pub use errors::HttpError;
pub use http_client::{HttpClient, HttpResponse, SDK_VERSION};
