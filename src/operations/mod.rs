//! The catalog of GraphQL operations the Cashramp API supports.
//!
//! Each [`Operation`] pairs the field name the server answers under with the
//! fixed document text sent for it. The catalog is static; nothing here
//! performs I/O.
//!
//! # Example
//!
//! ```rust
//! use cashramp::operations::{self, OperationKind};
//!
//! let account = operations::Operation::find("account").unwrap();
//! assert_eq!(account.kind, OperationKind::Query);
//! assert!(account.document.contains("depositAddress"));
//! ```

mod inputs;
mod mutations;
mod queries;

pub use inputs::{CustomerInput, HostedPaymentInput, PaymentCurrency, PaymentMethodField, PaymentType};
pub use mutations::{
    ADD_PAYMENT_METHOD, CANCEL_HOSTED_PAYMENT, CONFIRM_TRANSACTION, CREATE_CUSTOMER,
    INITIATE_HOSTED_PAYMENT, WITHDRAW_ONCHAIN,
};
pub use queries::{
    ACCOUNT, AVAILABLE_COUNTRIES, MARKET_RATE, PAYMENT_METHOD_TYPES, PAYMENT_REQUEST,
    RAMPABLE_ASSETS, RAMP_LIMITS,
};

use std::fmt;

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A GraphQL query.
    Query,
    /// A GraphQL mutation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// A named GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    /// The field the server returns the payload under.
    pub name: &'static str,
    /// Query or mutation.
    pub kind: OperationKind,
    /// The GraphQL document text.
    pub document: &'static str,
}

impl Operation {
    /// Looks up a catalog entry by its field name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        ALL.iter().find(|operation| operation.name == name)
    }
}

/// Every operation in the catalog.
pub const ALL: &[Operation] = &[
    AVAILABLE_COUNTRIES,
    MARKET_RATE,
    PAYMENT_METHOD_TYPES,
    RAMPABLE_ASSETS,
    RAMP_LIMITS,
    PAYMENT_REQUEST,
    ACCOUNT,
    CONFIRM_TRANSACTION,
    INITIATE_HOSTED_PAYMENT,
    CANCEL_HOSTED_PAYMENT,
    CREATE_CUSTOMER,
    ADD_PAYMENT_METHOD,
    WITHDRAW_ONCHAIN,
];
