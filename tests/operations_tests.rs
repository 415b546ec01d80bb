//! Integration tests for the per-operation client methods.
//!
//! Each test checks that a method sends its catalog document with its
//! arguments mapped onto the operation's variables, and returns the field
//! the server answers under.

mod common;

use cashramp::operations::{self, Operation};
use cashramp::{
    CustomerInput, HostedPaymentInput, PaymentCurrency, PaymentMethodField, PaymentType,
};
use common::create_mock_client;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a mock expecting exactly one request with `operation`'s document
/// and `variables`, answering with `result` under the operation's name.
async fn mount_operation(
    mock_server: &MockServer,
    operation: &Operation,
    variables: Option<Value>,
    result: Value,
) {
    let mut expected = json!({ "query": operation.document });
    if let Some(variables) = variables {
        expected["variables"] = variables;
    }

    let mut data = serde_json::Map::new();
    data.insert(operation.name.to_string(), result);

    Mock::given(method("POST"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_get_available_countries() {
    let mock_server = MockServer::start().await;
    let countries = json!([{ "id": "Q291bnRyeTox", "name": "Ghana", "code": "GH" }]);
    mount_operation(&mock_server, &operations::AVAILABLE_COUNTRIES, None, countries.clone()).await;

    let response = create_mock_client(&mock_server).get_available_countries().await;

    assert_eq!(response.result(), Some(&countries));
}

#[tokio::test]
async fn test_get_market_rate() {
    let mock_server = MockServer::start().await;
    let rate = json!({ "depositRate": "15.20", "withdrawalRate": "14.80" });
    mount_operation(
        &mock_server,
        &operations::MARKET_RATE,
        Some(json!({ "countryCode": "GH" })),
        rate.clone(),
    )
    .await;

    let response = create_mock_client(&mock_server).get_market_rate("GH").await;

    assert_eq!(response.result(), Some(&rate));
}

#[tokio::test]
async fn test_get_payment_method_types() {
    let mock_server = MockServer::start().await;
    mount_operation(
        &mock_server,
        &operations::PAYMENT_METHOD_TYPES,
        Some(json!({ "country": "Q291bnRyeTox" })),
        json!([]),
    )
    .await;

    let response = create_mock_client(&mock_server)
        .get_payment_method_types("Q291bnRyeTox")
        .await;

    assert_eq!(response.result(), Some(&json!([])));
}

#[tokio::test]
async fn test_get_rampable_assets() {
    let mock_server = MockServer::start().await;
    let assets = json!([{
        "name": "Tether",
        "symbol": "USDT",
        "networks": ["CELO", "TRON"],
        "contractAddress": { "CELO": "0x48065fbbe25f71c9282ddf5e1cd6d6a887483d5e" }
    }]);
    mount_operation(&mock_server, &operations::RAMPABLE_ASSETS, None, assets.clone()).await;

    let response = create_mock_client(&mock_server).get_rampable_assets().await;

    assert_eq!(response.result(), Some(&assets));
}

#[tokio::test]
async fn test_get_ramp_limits() {
    let mock_server = MockServer::start().await;
    let limits = json!({
        "minimumDepositUsd": "5",
        "maximumDepositUsd": "1000",
        "minimumWithdrawalUsd": "5",
        "maximumWithdrawalUsd": "1000",
        "dailyLimitUsd": "5000"
    });
    mount_operation(&mock_server, &operations::RAMP_LIMITS, None, limits.clone()).await;

    let response = create_mock_client(&mock_server).get_ramp_limits().await;

    assert_eq!(response.result(), Some(&limits));
}

#[tokio::test]
async fn test_get_payment_request() {
    let mock_server = MockServer::start().await;
    let request = json!({
        "id": "UGF5bWVudFJlcXVlc3Q6MQ==",
        "paymentType": "deposit",
        "hostedLink": "https://useaccrue.com/hosted/pay/1",
        "amount": "100",
        "currency": "usd",
        "reference": "order-42",
        "status": "created"
    });
    mount_operation(
        &mock_server,
        &operations::PAYMENT_REQUEST,
        Some(json!({ "reference": "order-42" })),
        request.clone(),
    )
    .await;

    let response = create_mock_client(&mock_server)
        .get_payment_request("order-42")
        .await;

    assert_eq!(response.result(), Some(&request));
}

#[tokio::test]
async fn test_get_account() {
    let mock_server = MockServer::start().await;
    let account = json!({ "id": "QWNjb3VudDox", "accountBalance": "10", "depositAddress": "0xabc" });
    mount_operation(&mock_server, &operations::ACCOUNT, None, account.clone()).await;

    let response = create_mock_client(&mock_server).get_account().await;

    assert_eq!(response.result(), Some(&account));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_confirm_transaction() {
    let mock_server = MockServer::start().await;
    mount_operation(
        &mock_server,
        &operations::CONFIRM_TRANSACTION,
        Some(json!({ "paymentRequest": "UGF5bWVudFJlcXVlc3Q6MQ==", "transactionHash": "0xhash" })),
        json!(true),
    )
    .await;

    let response = create_mock_client(&mock_server)
        .confirm_transaction("UGF5bWVudFJlcXVlc3Q6MQ==", "0xhash")
        .await;

    assert_eq!(response.result(), Some(&json!(true)));
}

#[tokio::test]
async fn test_initiate_hosted_payment() {
    let mock_server = MockServer::start().await;
    let created = json!({
        "id": "UGF5bWVudFJlcXVlc3Q6Mg==",
        "hostedLink": "https://useaccrue.com/hosted/pay/2",
        "status": "created"
    });
    mount_operation(
        &mock_server,
        &operations::INITIATE_HOSTED_PAYMENT,
        Some(json!({
            "amount": 100.0,
            "currency": "usd",
            "countryCode": "GH",
            "paymentType": "deposit",
            "reference": "order-43",
            "redirectUrl": "https://shop.example.com/done",
            "firstName": "Ama",
            "lastName": "Mensah",
            "email": "ama@example.com"
        })),
        created.clone(),
    )
    .await;

    let input = HostedPaymentInput {
        amount: 100.0,
        currency: Some(PaymentCurrency::Usd),
        country_code: "GH".to_string(),
        payment_type: PaymentType::Deposit,
        reference: "order-43".to_string(),
        redirect_url: Some("https://shop.example.com/done".to_string()),
        first_name: "Ama".to_string(),
        last_name: "Mensah".to_string(),
        email: "ama@example.com".to_string(),
    };
    let response = create_mock_client(&mock_server)
        .initiate_hosted_payment(&input)
        .await;

    assert_eq!(response.result(), Some(&created));
}

#[tokio::test]
async fn test_cancel_hosted_payment() {
    let mock_server = MockServer::start().await;
    mount_operation(
        &mock_server,
        &operations::CANCEL_HOSTED_PAYMENT,
        Some(json!({ "paymentRequest": "UGF5bWVudFJlcXVlc3Q6Mg==" })),
        json!(true),
    )
    .await;

    let response = create_mock_client(&mock_server)
        .cancel_hosted_payment("UGF5bWVudFJlcXVlc3Q6Mg==")
        .await;

    assert!(response.is_success());
}

#[tokio::test]
async fn test_create_customer() {
    let mock_server = MockServer::start().await;
    let customer = json!({
        "id": "Q3VzdG9tZXI6MQ==",
        "email": "kofi@example.com",
        "firstName": "Kofi",
        "lastName": "Boateng",
        "country": { "id": "Q291bnRyeTox", "name": "Ghana", "code": "GH" }
    });
    mount_operation(
        &mock_server,
        &operations::CREATE_CUSTOMER,
        Some(json!({
            "firstName": "Kofi",
            "lastName": "Boateng",
            "email": "kofi@example.com",
            "country": "Q291bnRyeTox"
        })),
        customer.clone(),
    )
    .await;

    let input = CustomerInput {
        first_name: "Kofi".to_string(),
        last_name: "Boateng".to_string(),
        email: "kofi@example.com".to_string(),
        country: "Q291bnRyeTox".to_string(),
    };
    let response = create_mock_client(&mock_server).create_customer(&input).await;

    assert_eq!(response.result(), Some(&customer));
}

#[tokio::test]
async fn test_add_payment_method() {
    let mock_server = MockServer::start().await;
    let method_result = json!({
        "id": "UDJQUGF5bWVudE1ldGhvZDox",
        "value": "0241234567",
        "fields": [{ "identifier": "phone", "value": "0241234567" }]
    });
    mount_operation(
        &mock_server,
        &operations::ADD_PAYMENT_METHOD,
        Some(json!({
            "customer": "Q3VzdG9tZXI6MQ==",
            "paymentMethodType": "UDJQUGF5bWVudE1ldGhvZFR5cGU6MQ==",
            "fields": [
                { "identifier": "phone", "value": "0241234567" },
                { "identifier": "name", "value": "Kofi Boateng" }
            ]
        })),
        method_result.clone(),
    )
    .await;

    let fields = [
        PaymentMethodField::new("phone", "0241234567"),
        PaymentMethodField::new("name", "Kofi Boateng"),
    ];
    let response = create_mock_client(&mock_server)
        .add_payment_method(
            "Q3VzdG9tZXI6MQ==",
            "UDJQUGF5bWVudE1ldGhvZFR5cGU6MQ==",
            &fields,
        )
        .await;

    assert_eq!(response.result(), Some(&method_result));
}

#[tokio::test]
async fn test_withdraw_onchain() {
    let mock_server = MockServer::start().await;
    let withdrawal = json!({ "id": "V2l0aGRyYXdhbDox", "status": "pending" });
    mount_operation(
        &mock_server,
        &operations::WITHDRAW_ONCHAIN,
        Some(json!({ "address": "0xdef", "amountUsd": "25.50" })),
        withdrawal.clone(),
    )
    .await;

    let response = create_mock_client(&mock_server)
        .withdraw_onchain("0xdef", "25.50")
        .await;

    assert_eq!(response.result(), Some(&withdrawal));
}
