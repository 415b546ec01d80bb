//! Typed variables for the mutations that take more than a couple of
//! arguments.
//!
//! Field names serialize in camelCase to match the GraphQL variable names.
//! Optional fields left as `None` are omitted from the variables object.

use serde::Serialize;

/// Currency a hosted payment amount is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCurrency {
    /// The customer's local currency.
    LocalCurrency,
    /// US dollars.
    Usd,
}

/// Direction of a hosted payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Customer pays in local currency; funds arrive as crypto.
    Deposit,
    /// Crypto is paid out to the customer in local currency.
    Withdrawal,
}

/// Variables for [`INITIATE_HOSTED_PAYMENT`](super::INITIATE_HOSTED_PAYMENT).
///
/// # Example
///
/// ```rust
/// use cashramp::{HostedPaymentInput, PaymentType};
///
/// let input = HostedPaymentInput {
///     amount: 100.0,
///     currency: None,
///     country_code: "GH".to_string(),
///     payment_type: PaymentType::Deposit,
///     reference: "order-42".to_string(),
///     redirect_url: None,
///     first_name: "Ama".to_string(),
///     last_name: "Mensah".to_string(),
///     email: "ama@example.com".to_string(),
/// };
///
/// let variables = serde_json::to_value(&input).unwrap();
/// assert_eq!(variables["countryCode"], "GH");
/// assert_eq!(variables["paymentType"], "deposit");
/// assert!(variables.get("redirectUrl").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedPaymentInput {
    /// Amount to deposit or withdraw.
    pub amount: f64,
    /// Currency of `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<PaymentCurrency>,
    /// Two-letter ISO 3166-1 country code.
    pub country_code: String,
    /// Deposit or withdrawal.
    pub payment_type: PaymentType,
    /// Merchant reference for the payment request.
    pub reference: String,
    /// Where to send the customer once the payment completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Customer's first name.
    pub first_name: String,
    /// Customer's last name.
    pub last_name: String,
    /// Customer's email address.
    pub email: String,
}

/// Variables for [`CREATE_CUSTOMER`](super::CREATE_CUSTOMER).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    /// Customer's first name.
    pub first_name: String,
    /// Customer's last name.
    pub last_name: String,
    /// Customer's email address.
    pub email: String,
    /// Global ID of the customer's country.
    pub country: String,
}

/// One filled-in field of a P2P payment method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentMethodField {
    /// Field identifier from the payment method type.
    pub identifier: String,
    /// Value entered for the field.
    pub value: String,
}

impl PaymentMethodField {
    /// Creates a field.
    #[must_use]
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: value.into(),
        }
    }
}
