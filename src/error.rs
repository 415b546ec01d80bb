//! Error types for the Cashramp SDK.
//!
//! This module contains the errors raised while building a client
//! configuration. Per-call failures are never raised; they are reported
//! through [`CashrampResponse`](crate::CashrampResponse) instead.
//!
//! # Example
//!
//! ```rust
//! use cashramp::{CashrampConfig, ConfigError};
//!
//! let result = CashrampConfig::builder()
//!     .environment("prod")
//!     .secret_key("CSHRMP-SECK-123")
//!     .build();
//! assert!(matches!(result, Err(ConfigError::InvalidEnvironment { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// These are fatal to client construction and are never recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment is not one of `test` or `live`.
    #[error("\"{env}\" is not a valid env. Can either be \"test\" or \"live\".")]
    InvalidEnvironment {
        /// The rejected environment value.
        env: String,
    },

    /// No secret key was supplied, explicitly or through `CASHRAMP_SECRET_KEY`.
    #[error("Please provide your API secret key.")]
    MissingSecretKey,

    /// An endpoint override is not a usable URL.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:8080/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
