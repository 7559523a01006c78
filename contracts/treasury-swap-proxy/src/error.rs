//! Error types for the Treasury Swap proxy

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;
use treasury_common::ConversionError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Transport Errors
    // ========================================================================

    #[error("Unauthorized: only the cross-chain layer can deliver messages")]
    Unauthorized,

    #[error("Invalid target: message is for {got}, this proxy is {expected}")]
    InvalidTarget { expected: String, got: String },

    #[error("Unsupported method: {method}")]
    UnsupportedMethod { method: String },

    // ========================================================================
    // Asset Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Unexpected asset: expected {expected}, got {got}")]
    UnexpectedAsset { expected: String, got: String },

    #[error("Unexpected deposit of {amount} {token}: burn takes no deposits")]
    UnexpectedDeposit { token: String, amount: Uint128 },

    #[error("Unexpected withdrawal of {amount} {token}: mint takes no withdrawals")]
    UnexpectedWithdrawal { token: String, amount: Uint128 },

    // ========================================================================
    // Conversion Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

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
