//! Treasury Common - Shared Types and Utilities for the Treasury Swap Contracts
//!
//! This package provides the fixed-point conversion math used by both the
//! Treasury Swap engine and its proxy, plus the cross-chain message types the
//! proxy exchanges with the messaging layer.

pub mod conversion;
pub mod message;

pub use conversion::{
    collateral_to_wrapped, wrapped_to_collateral, ConversionError, SwapRate,
    DEFAULT_WRAPPED_DECIMALS,
};
pub use message::{
    InMessage, OutMessage, ProxyArguments, ProxyMethod, TokenAmount, BURN_METHOD, MINT_METHOD,
};
