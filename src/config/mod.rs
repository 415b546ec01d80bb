//! Configuration types for the Cashramp SDK.
//!
//! This module provides the configuration used to construct a
//! [`Cashramp`](crate::Cashramp) client.
//!
//! # Overview
//!
//! - [`CashrampConfig`]: The resolved, immutable client configuration
//! - [`CashrampConfigBuilder`]: A builder that resolves defaults and validates input
//! - [`Environment`]: The Cashramp deployment to target
//! - [`SecretKey`]: A validated secret key with masked debug output
//! - [`EndpointUrl`]: A validated URL for redirecting requests to a proxy or mock
//!
//! # Resolution Order
//!
//! Each setting is resolved once, when [`CashrampConfigBuilder::build`] runs:
//!
//! 1. The value passed to the builder
//! 2. The `CASHRAMP_ENV` / `CASHRAMP_SECRET_KEY` process variable
//! 3. The hard default (`live` for the environment; the secret key has none)
//!
//! Empty strings are treated as absent at every step.
//!
//! # Example
//!
//! ```rust
//! use cashramp::{CashrampConfig, Environment};
//!
//! let config = CashrampConfig::builder()
//!     .environment("test")
//!     .secret_key("CSHRMP-SECK-123")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), Environment::Test);
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, API_HOST, API_PATH};
pub use newtypes::{EndpointUrl, SecretKey};

use crate::error::ConfigError;

/// Process variable consulted for the environment when none is given.
pub const ENV_VAR_ENVIRONMENT: &str = "CASHRAMP_ENV";

/// Process variable consulted for the secret key when none is given.
pub const ENV_VAR_SECRET_KEY: &str = "CASHRAMP_SECRET_KEY";

/// Resolved configuration for a Cashramp client.
///
/// The API URL is derived from the environment when the configuration is
/// built and never recomputed.
///
/// # Thread Safety
///
/// `CashrampConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CashrampConfig {
    environment: Environment,
    secret_key: SecretKey,
    api_url: String,
}

impl CashrampConfig {
    /// Creates a new builder for constructing a `CashrampConfig`.
    #[must_use]
    pub fn builder() -> CashrampConfigBuilder {
        CashrampConfigBuilder::new()
    }

    /// Builds a configuration purely from process variables.
    ///
    /// # Errors
    ///
    /// See [`CashrampConfigBuilder::build`].
    pub fn from_env() -> Result<Self, ConfigError> {
        CashrampConfigBuilder::new().build()
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the GraphQL endpoint derived from the environment.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

// Verify CashrampConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CashrampConfig>();
};

/// Builder for constructing [`CashrampConfig`] instances.
///
/// Values are kept as raw strings until [`build`](Self::build) so that an
/// invalid environment is reported with the exact value that was supplied.
#[derive(Debug, Default)]
pub struct CashrampConfigBuilder {
    environment: Option<String>,
    secret_key: Option<String>,
}

impl CashrampConfigBuilder {
    /// Creates a new builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the environment (`"test"` or `"live"`).
    #[must_use]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the secret key.
    #[must_use]
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Builds the [`CashrampConfig`], falling back to process variables for
    /// anything not set on the builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if the resolved environment
    /// is not `test` or `live`, and [`ConfigError::MissingSecretKey`] if no
    /// secret key could be resolved.
    pub fn build(self) -> Result<CashrampConfig, ConfigError> {
        self.build_with_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the [`CashrampConfig`] using `lookup` in place of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashramp::{CashrampConfig, Environment};
    ///
    /// let config = CashrampConfig::builder()
    ///     .build_with_lookup(|name| match name {
    ///         "CASHRAMP_ENV" => Some("test".to_string()),
    ///         "CASHRAMP_SECRET_KEY" => Some("from-settings".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(config.environment(), Environment::Test);
    /// assert_eq!(config.secret_key().as_ref(), "from-settings");
    /// ```
    pub fn build_with_lookup<F>(self, lookup: F) -> Result<CashrampConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |explicit: Option<String>, name: &str| {
            explicit
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(name).filter(|value| !value.is_empty()))
        };

        let environment: Environment = resolve(self.environment, ENV_VAR_ENVIRONMENT)
            .map_or(Ok(Environment::default()), |raw| raw.parse())?;

        let secret_key = resolve(self.secret_key, ENV_VAR_SECRET_KEY)
            .ok_or(ConfigError::MissingSecretKey)
            .and_then(SecretKey::new)?;

        Ok(CashrampConfig {
            environment,
            secret_key,
            api_url: environment.api_url(),
        })
    }
}
