//! The Cashramp API client.
//!
//! This module provides [`Cashramp`], which sends GraphQL operations to the
//! configured endpoint and normalizes every outcome into a
//! [`CashrampResponse`].

use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::HttpClient;
use crate::config::{CashrampConfig, EndpointUrl, Environment};
use crate::error::ConfigError;
use crate::operations::{self, CustomerInput, HostedPaymentInput, Operation, PaymentMethodField};
use crate::response::CashrampResponse;

/// Body of a GraphQL request.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Client for the Cashramp API.
///
/// Every method makes exactly one HTTP request and never returns an error:
/// API-reported errors, network failures, and malformed responses all come
/// back as [`CashrampResponse::Failure`].
///
/// # Thread Safety
///
/// `Cashramp` is `Clone + Send + Sync`. Clones share the connection pool, and
/// concurrent calls are fully independent.
///
/// # Example
///
/// ```rust,ignore
/// use cashramp::{Cashramp, CashrampConfig};
///
/// let config = CashrampConfig::builder()
///     .environment("test")
///     .secret_key("CSHRMP-SECK-123")
///     .build()?;
/// let client = Cashramp::new(&config);
///
/// let response = client.get_market_rate("GH").await;
/// match response.into_result() {
///     Ok(rate) => println!("Deposit rate: {}", rate["depositRate"]),
///     Err(message) => eprintln!("Cashramp error: {message}"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Cashramp {
    http_client: HttpClient,
    environment: Environment,
}

// Verify Cashramp is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cashramp>();
};

impl Cashramp {
    /// Creates a client for the configuration's environment.
    #[must_use]
    pub fn new(config: &CashrampConfig) -> Self {
        Self {
            http_client: HttpClient::new(config.api_url(), config.secret_key()),
            environment: config.environment(),
        }
    }

    /// Creates a client whose requests go to `endpoint` instead of the
    /// environment's URL, e.g. a forwarding proxy or a local mock server.
    ///
    /// The configuration itself is left untouched.
    #[must_use]
    pub fn with_endpoint(config: &CashrampConfig, endpoint: &EndpointUrl) -> Self {
        tracing::debug!(
            "Cashramp client overriding {} endpoint {} with {}",
            config.environment(),
            config.api_url(),
            endpoint.as_ref()
        );

        Self {
            http_client: HttpClient::new(endpoint.as_ref(), config.secret_key()),
            environment: config.environment(),
        }
    }

    /// Creates a client configured entirely from `CASHRAMP_ENV` and
    /// `CASHRAMP_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment is invalid or no secret key
    /// is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        CashrampConfig::from_env().map(|config| Self::new(&config))
    }

    /// Returns the environment this client was configured for.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    // QUERIES

    /// Fetches the countries Cashramp is available in.
    ///
    /// Result: `[{ id, name, code }]`.
    pub async fn get_available_countries(&self) -> CashrampResponse {
        self.execute(&operations::AVAILABLE_COUNTRIES, None).await
    }

    /// Fetches the market rate for a two-letter ISO 3166-1 country code.
    ///
    /// Result: `{ depositRate, withdrawalRate }`.
    pub async fn get_market_rate(&self, country_code: &str) -> CashrampResponse {
        let variables = json!({ "countryCode": country_code });
        self.execute(&operations::MARKET_RATE, Some(variables)).await
    }

    /// Fetches the P2P payment method types available in a country, by the
    /// country's global ID.
    pub async fn get_payment_method_types(&self, country: &str) -> CashrampResponse {
        let variables = json!({ "country": country });
        self.execute(&operations::PAYMENT_METHOD_TYPES, Some(variables))
            .await
    }

    /// Fetches the assets that can be on/offramped with the onchain ramp.
    pub async fn get_rampable_assets(&self) -> CashrampResponse {
        self.execute(&operations::RAMPABLE_ASSETS, None).await
    }

    /// Fetches the onchain ramp limits.
    pub async fn get_ramp_limits(&self) -> CashrampResponse {
        self.execute(&operations::RAMP_LIMITS, None).await
    }

    /// Fetches a payment request by its reference.
    pub async fn get_payment_request(&self, reference: &str) -> CashrampResponse {
        let variables = json!({ "reference": reference });
        self.execute(&operations::PAYMENT_REQUEST, Some(variables))
            .await
    }

    /// Fetches the account balance and deposit address.
    ///
    /// Result: `{ id, accountBalance, depositAddress }`.
    pub async fn get_account(&self) -> CashrampResponse {
        self.execute(&operations::ACCOUNT, None).await
    }

    // MUTATIONS

    /// Confirms a crypto transfer sent to the escrow address of a payment
    /// request.
    pub async fn confirm_transaction(
        &self,
        payment_request: &str,
        transaction_hash: &str,
    ) -> CashrampResponse {
        let variables = json!({
            "paymentRequest": payment_request,
            "transactionHash": transaction_hash,
        });
        self.execute(&operations::CONFIRM_TRANSACTION, Some(variables))
            .await
    }

    /// Initiates a hosted payment.
    ///
    /// Result: `{ id, hostedLink, status }`.
    pub async fn initiate_hosted_payment(&self, input: &HostedPaymentInput) -> CashrampResponse {
        self.execute_with(&operations::INITIATE_HOSTED_PAYMENT, input)
            .await
    }

    /// Cancels an initiated hosted payment, by the payment request's global ID.
    pub async fn cancel_hosted_payment(&self, payment_request: &str) -> CashrampResponse {
        let variables = json!({ "paymentRequest": payment_request });
        self.execute(&operations::CANCEL_HOSTED_PAYMENT, Some(variables))
            .await
    }

    /// Creates a customer.
    pub async fn create_customer(&self, input: &CustomerInput) -> CashrampResponse {
        self.execute_with(&operations::CREATE_CUSTOMER, input).await
    }

    /// Adds a payment method for an existing customer.
    pub async fn add_payment_method(
        &self,
        customer: &str,
        payment_method_type: &str,
        fields: &[PaymentMethodField],
    ) -> CashrampResponse {
        let variables = json!({
            "customer": customer,
            "paymentMethodType": payment_method_type,
            "fields": fields,
        });
        self.execute(&operations::ADD_PAYMENT_METHOD, Some(variables))
            .await
    }

    /// Withdraws from the account balance to an onchain wallet address.
    pub async fn withdraw_onchain(&self, address: &str, amount_usd: &str) -> CashrampResponse {
        let variables = json!({ "address": address, "amountUsd": amount_usd });
        self.execute(&operations::WITHDRAW_ONCHAIN, Some(variables))
            .await
    }

    // GENERAL

    /// Sends an arbitrary GraphQL document and returns the value the server
    /// reports under `name`.
    ///
    /// When `variables` is `None` the `variables` key is left out of the
    /// request body.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let response = client
    ///     .send_request(
    ///         "marketRate",
    ///         "query ($countryCode: String!) { marketRate(countryCode: $countryCode) { depositRate } }",
    ///         Some(json!({ "countryCode": "GH" })),
    ///     )
    ///     .await;
    /// ```
    pub async fn send_request(
        &self,
        name: &str,
        query: &str,
        variables: Option<Value>,
    ) -> CashrampResponse {
        tracing::debug!("Sending Cashramp request for {}", name);

        let body = GraphqlRequest {
            query,
            variables: variables.as_ref(),
        };

        match self.http_client.post_json(&body).await {
            Ok(response) => {
                let normalized = CashrampResponse::from_graphql_body(name, &response.body);
                if let Some(error) = normalized.error() {
                    tracing::debug!("Cashramp API returned an error for {}: {}", name, error);
                }
                normalized
            }
            Err(error) => {
                tracing::warn!("Cashramp request for {} failed: {}", name, error);
                CashrampResponse::failure(error.to_string())
            }
        }
    }

    async fn execute(&self, operation: &Operation, variables: Option<Value>) -> CashrampResponse {
        self.send_request(operation.name, operation.document, variables)
            .await
    }

    async fn execute_with<V: Serialize + Sync>(
        &self,
        operation: &Operation,
        variables: &V,
    ) -> CashrampResponse {
        match serde_json::to_value(variables) {
            Ok(variables) => self.execute(operation, Some(variables)).await,
            Err(error) => {
                tracing::warn!(
                    "Could not serialize variables for {}: {}",
                    operation.name,
                    error
                );
                CashrampResponse::failure(error.to_string())
            }
        }
    }
}
