//! Error types for the Treasury Swap contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;
use treasury_common::ConversionError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the registered proxy can call mint and burn")]
    UnauthorizedCaller,

    #[error("Proxy not registered")]
    ProxyNotRegistered,

    #[error("Proxy already registered: {proxy}")]
    ProxyAlreadyRegistered { proxy: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Decimals mismatch for {token}: configured {expected}, token reports {got}")]
    DecimalsMismatch { token: String, expected: u8, got: u8 },

    // ========================================================================
    // Conversion Errors
    // ========================================================================

    #[error("Amount {amount} out of bounds [{lower_bound}, {upper_bound}]")]
    OutOfBounds {
        amount: Uint128,
        lower_bound: Uint128,
        upper_bound: Uint128,
    },

    #[error("Conversion of {amount} rounds to zero")]
    ZeroConversion { amount: Uint128 },

    #[error("Insufficient ledger balance: required {required}, available {available}")]
    InsufficientLedgerBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Insufficient collateral: required {required}, available {available}")]
    InsufficientCollateral {
        required: Uint128,
        available: Uint128,
    },

    #[error("Unexpected asset: expected {expected}, got {got}")]
    UnexpectedAsset { expected: String, got: String },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<ConversionError> for ContractError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::ArithmeticOverflow => ContractError::ArithmeticOverflow,
            other => ContractError::InvalidConfig {
                reason: other.to_string(),
            },
        }
    }
}
