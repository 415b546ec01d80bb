//! Mutation documents.

use super::{Operation, OperationKind};

/// Confirms a crypto transfer into the escrow address.
/// Variables: `paymentRequest`, `transactionHash`.
pub const CONFIRM_TRANSACTION: Operation = Operation {
    name: "confirmTransaction",
    kind: OperationKind::Mutation,
    document: "
  mutation ($paymentRequest: ID!, $transactionHash: String!) {
    confirmTransaction(paymentRequest: $paymentRequest, transactionHash: $transactionHash)
  }
",
};

/// Starts a hosted deposit or withdrawal.
/// Variables: see [`HostedPaymentInput`](super::HostedPaymentInput).
pub const INITIATE_HOSTED_PAYMENT: Operation = Operation {
    name: "initiateHostedPayment",
    kind: OperationKind::Mutation,
    document: "
  mutation ($amount: Decimal!, $currency: P2PPaymentCurrency, $countryCode: String!, $email: String!, $paymentType: P2PPaymentTypeType!, $reference: String!, $firstName: String!, $lastName: String!, $redirectUrl: String) {
    initiateHostedPayment(amount: $amount, currency: $currency, countryCode: $countryCode, email: $email, paymentType: $paymentType, reference: $reference, firstName: $firstName, lastName: $lastName, redirectUrl: $redirectUrl) {
      id
      hostedLink
      status
    }
  }
",
};

/// Cancels a hosted payment. Variables: `paymentRequest`.
pub const CANCEL_HOSTED_PAYMENT: Operation = Operation {
    name: "cancelHostedPayment",
    kind: OperationKind::Mutation,
    document: "
  mutation ($paymentRequest: ID!) {
    cancelHostedPayment(paymentRequest: $paymentRequest)
  }
",
};

/// Creates a customer.
/// Variables: see [`CustomerInput`](super::CustomerInput).
pub const CREATE_CUSTOMER: Operation = Operation {
    name: "createCustomer",
    kind: OperationKind::Mutation,
    document: "
  mutation ($email: String!, $firstName: String!, $lastName: String!, $country: ID!) {
    createCustomer(email: $email, firstName: $firstName, lastName: $lastName, country: $country) {
      id
      email
      firstName
      lastName
      country {
        id
        name
        code
      }
    }
  }
",
};

/// Adds a payment method to a customer.
/// Variables: `customer`, `paymentMethodType`, `fields`.
pub const ADD_PAYMENT_METHOD: Operation = Operation {
    name: "addPaymentMethod",
    kind: OperationKind::Mutation,
    document: "
  mutation ($customer: ID!, $paymentMethodType: ID!, $fields: [P2PPaymentMethodFieldInput!]!) {
    addPaymentMethod(customer: $customer, p2pPaymentMethodType: $paymentMethodType, fields: $fields) {
      id
      value
      fields {
        identifier
        value
      }
    }
  }
",
};

/// Withdraws balance to an onchain wallet. Variables: `address`, `amountUsd`.
pub const WITHDRAW_ONCHAIN: Operation = Operation {
    name: "withdrawOnchain",
    kind: OperationKind::Mutation,
    document: "
  mutation ($address: String!, $amountUsd: Decimal!) {
    withdrawOnchain(address: $address, amountUsd: $amountUsd) {
      id
      status
    }
  }
",
};
