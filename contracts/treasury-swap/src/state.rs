//! State definitions for the Treasury Swap contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;
use treasury_common::{ConversionError, SwapRate};

pub const CONTRACT_NAME: &str = "crates.io:treasury-swap";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Admin address (proxy registration only)
    pub admin: Addr,
    /// CW20 collateral token locked by the treasury
    pub collateral_token: Addr,
    /// CW20 wrapped token minted and burned on the treasury's instruction
    pub wrapped_token: Addr,
    /// Messaging-layer custody account that wrapped burns are drawn from
    pub custody: Addr,
    /// Collateral amount (at `decimals`) that one whole wrapped unit represents
    pub token_value: Uint128,
    /// Collateral token decimals
    pub decimals: u8,
    /// Wrapped token decimals
    pub wrapped_decimals: u8,
    /// Maximum collateral amount per mint/burn
    pub upper_bound: Uint128,
    /// Minimum collateral amount per mint/burn
    pub lower_bound: Uint128,
}

impl Config {
    pub fn rate(&self) -> Result<SwapRate, ConversionError> {
        SwapRate::new(self.token_value, self.decimals, self.wrapped_decimals)
    }
}

/// Treasury statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_mints: u64,
    pub total_burns: u64,
    /// Cumulative collateral received by mints
    pub total_collateral_locked: Uint128,
    /// Cumulative collateral released by burns
    pub total_collateral_released: Uint128,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Proxy allowed to call mint and burn; bound once by the admin
pub const PROXY: Item<Addr> = Item::new("proxy");

/// Outstanding wrapped amount backed by the treasury
pub const TREASURY_WRAPPED_BALANCE: Item<Uint128> = Item::new("treasury_wrapped_balance");

pub const STATS: Item<Stats> = Item::new("stats");
