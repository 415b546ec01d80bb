//! Cashramp environment definitions.
//!
//! This module provides the [`Environment`] enum for selecting which Cashramp
//! deployment the client talks to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Host serving the live Cashramp API.
pub const API_HOST: &str = "api.useaccrue.com";

/// Path of the GraphQL endpoint on either host.
pub const API_PATH: &str = "/cashramp/api/graphql";

/// Cashramp deployment environment.
///
/// # Example
///
/// ```rust
/// use cashramp::Environment;
///
/// let env: Environment = "test".parse().unwrap();
/// assert_eq!(env, Environment::Test);
/// assert_eq!(
///     env.api_url(),
///     "https://staging.api.useaccrue.com/cashramp/api/graphql"
/// );
///
/// assert!("prod".parse::<Environment>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The staging deployment, for integration work with test funds.
    Test,
    /// The production deployment.
    #[default]
    Live,
}

impl Environment {
    /// Returns the canonical string form (`"test"` or `"live"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }

    /// Returns the GraphQL endpoint for this environment.
    #[must_use]
    pub fn api_url(&self) -> String {
        match self {
            Self::Test => format!("https://staging.{API_HOST}{API_PATH}"),
            Self::Live => format!("https://{API_HOST}{API_PATH}"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "live" => Ok(Self::Live),
            other => Err(ConfigError::InvalidEnvironment {
                env: other.to_string(),
            }),
        }
    }
}
