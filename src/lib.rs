//! # Cashramp Rust SDK
//!
//! A Rust SDK for the Cashramp API, a GraphQL service for moving between
//! local currency and crypto.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated configuration via [`CashrampConfig`] and [`CashrampConfigBuilder`]
//! - Environment selection (`test` or `live`) with endpoint derivation
//! - A typed method for every operation in the [`operations`] catalog
//! - A generic [`Cashramp::send_request`] for arbitrary GraphQL documents
//! - A uniform [`CashrampResponse`] for every call, success or failure
//!
//! ## Quick Start
//!
//! ```rust
//! use cashramp::{Cashramp, CashrampConfig};
//!
//! let config = CashrampConfig::builder()
//!     .environment("test")
//!     .secret_key("CSHRMP-SECK-123")
//!     .build()
//!     .unwrap();
//!
//! let client = Cashramp::new(&config);
//! assert_eq!(
//!     client.endpoint(),
//!     "https://staging.api.useaccrue.com/cashramp/api/graphql"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use cashramp::{Cashramp, CashrampResponse};
//!
//! let client = Cashramp::from_env()?;
//!
//! match client.get_account().await {
//!     CashrampResponse::Success { result } => {
//!         println!("Balance: {}", result["accountBalance"]);
//!     }
//!     CashrampResponse::Failure { error } => {
//!         eprintln!("Cashramp error: {error}");
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only construction can fail, with a [`ConfigError`]. Calls never return an
//! error type: GraphQL errors, network failures, and malformed responses are
//! all reported as [`CashrampResponse::Failure`].
//!
//! ## Design Principles
//!
//! - **Resolved once**: Configuration is read and validated at construction
//! - **One request per call**: No retries, caching, or background work
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod operations;
pub mod response;

pub use client::Cashramp;
pub use config::{
    CashrampConfig, CashrampConfigBuilder, EndpointUrl, Environment, SecretKey,
};
pub use error::ConfigError;
pub use operations::{
    CustomerInput, HostedPaymentInput, Operation, OperationKind, PaymentCurrency,
    PaymentMethodField, PaymentType,
};
pub use response::{CashrampResponse, GENERIC_ERROR_MESSAGE};
