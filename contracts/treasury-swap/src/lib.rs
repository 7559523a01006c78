//! Treasury Swap Contract - Collateral-Backed Wrapped Asset Ledger
//!
//! The treasury locks a CW20 collateral token and tracks the wrapped-asset
//! supply that collateral backs. It is driven by a single registered proxy
//! that translates cross-chain messages into calls.
//!
//! # Mint
//! 1. The proxy sends collateral to this contract with CW20 `Send`
//! 2. The receive hook is the verified deposit: token and amount are attested
//!    by the collateral contract itself
//! 3. The treasury converts at the configured rate, increments its wrapped
//!    ledger and mints the wrapped amount to the designated recipient
//!
//! # Burn
//! 1. The proxy requests the release of a collateral amount
//! 2. The treasury converts at the same rate, checks its ledger and custody
//! 3. Collateral is released to the recipient and the wrapped amount is burned
//!    from the custody account
//!
//! # Safety
//! - Per-call lower/upper bounds on the collateral amount
//! - Integer-only conversion, rounded down in both directions
//! - Ledger and custody sufficiency checked before any state is written

pub mod contract;
pub mod engine;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::engine::{CollateralCustody, TreasuryLedger, VerifiedDeposit};
pub use crate::error::ContractError;
