//! Shared helpers for integration tests.

#![allow(dead_code)]

use cashramp::{Cashramp, CashrampConfig, EndpointUrl};
use wiremock::MockServer;

/// Path the mock server serves the GraphQL endpoint on.
pub const GRAPHQL_PATH: &str = "/cashramp/api/graphql";

/// Secret key used by every test client.
pub const SECRET_KEY: &str = "CSHRMP-SECK-123456789";

/// Creates a `test` environment config without consulting process variables.
pub fn create_test_config() -> CashrampConfig {
    CashrampConfig::builder()
        .environment("test")
        .secret_key(SECRET_KEY)
        .build_with_lookup(|_| None)
        .unwrap()
}

/// Creates a client that sends its requests to `mock_server`.
pub fn create_mock_client(mock_server: &MockServer) -> Cashramp {
    let endpoint = EndpointUrl::new(format!("{}{GRAPHQL_PATH}", mock_server.uri())).unwrap();
    Cashramp::with_endpoint(&create_test_config(), &endpoint)
}
