//! Query documents.

use super::{Operation, OperationKind};

/// Countries Cashramp is available in.
pub const AVAILABLE_COUNTRIES: Operation = Operation {
    name: "availableCountries",
    kind: OperationKind::Query,
    document: "
  query {
    availableCountries {
      id
      name
      code
    }
  }
",
};

/// Deposit and withdrawal rates for a country. Variables: `countryCode`.
pub const MARKET_RATE: Operation = Operation {
    name: "marketRate",
    kind: OperationKind::Query,
    document: "
  query ($countryCode: String!) {
    marketRate(countryCode: $countryCode) {
      depositRate
      withdrawalRate
    }
  }
",
};

/// P2P payment method types for a country. Variables: `country`.
pub const PAYMENT_METHOD_TYPES: Operation = Operation {
    name: "p2pPaymentMethodTypes",
    kind: OperationKind::Query,
    document: "
  query ($country: ID!) {
    p2pPaymentMethodTypes(country: $country) {
      id
      identifier
      label
      fields {
        label
        identifier
        required
      }
    }
  }
",
};

/// Assets usable with the onchain ramp.
pub const RAMPABLE_ASSETS: Operation = Operation {
    name: "rampableAssets",
    kind: OperationKind::Query,
    document: "
  query {
    rampableAssets {
      name
      symbol
      networks
      contractAddress
    }
  }
",
};

/// Onchain ramp limits in USD.
pub const RAMP_LIMITS: Operation = Operation {
    name: "rampLimits",
    kind: OperationKind::Query,
    document: "
  query {
    rampLimits {
      minimumDepositUsd
      maximumDepositUsd
      minimumWithdrawalUsd
      maximumWithdrawalUsd
      dailyLimitUsd
    }
  }
",
};

/// A merchant payment request looked up by reference. Variables: `reference`.
pub const PAYMENT_REQUEST: Operation = Operation {
    name: "merchantPaymentRequest",
    kind: OperationKind::Query,
    document: "
  query ($reference: String!) {
    merchantPaymentRequest(reference: $reference) {
      id
      paymentType
      hostedLink
      amount
      currency
      reference
      status
    }
  }
",
};

/// The account's balance and deposit address.
pub const ACCOUNT: Operation = Operation {
    name: "account",
    kind: OperationKind::Query,
    document: "
  query {
    account {
      id
      accountBalance
      depositAddress
    }
  }
",
};
