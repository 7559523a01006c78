//! Treasury Swap Proxy
//!
//! Adapter between the cross-chain messaging layer and the Treasury Swap
//! contract. Each inbound message names one of two methods:
//!
//! - `mint(bytes,bytes)`: the single collateral deposit the layer credited to
//!   this proxy is sent to the treasury, which mints the wrapped amount to the
//!   argument target. Replies with `tokens_locked`.
//! - `burn(bytes,bytes)`: the treasury releases the argument amount of
//!   collateral to the target and burns the wrapped equivalent from custody.
//!   Replies with `tokens_burned`.
//!
//! The reply is an [`treasury_common::OutMessage`] set as response data.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
