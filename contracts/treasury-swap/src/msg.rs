//! Message types for the Treasury Swap contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address (binds the proxy)
    pub admin: String,
    /// CW20 collateral token
    pub collateral_token: String,
    /// CW20 wrapped token; this contract must be its minter
    pub wrapped_token: String,
    /// Messaging-layer custody account holding bridged wrapped tokens
    pub custody: String,
    /// Collateral amount (at `decimals`) that one whole wrapped unit represents
    pub token_value: Uint128,
    /// Collateral token decimals (checked against the token)
    pub decimals: u8,
    /// Wrapped token decimals (checked against the token, default 9)
    pub wrapped_decimals: Option<u8>,
    /// Maximum collateral amount per mint/burn
    pub upper_bound: Uint128,
    /// Minimum collateral amount per mint/burn
    pub lower_bound: Uint128,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Collateral deposit (called via CW20 send)
    ///
    /// Authorization: the CW20 sender must be the registered proxy
    Receive(cw20::Cw20ReceiveMsg),

    /// Release collateral and burn the matching wrapped amount from custody
    ///
    /// Authorization: registered proxy only
    Burn {
        /// Collateral amount to release
        amount: Uint128,
        /// Address receiving the collateral
        recipient: String,
    },

    /// Bind the proxy allowed to mint and burn. Can only be done once.
    ///
    /// Authorization: Admin only
    RegisterProxy { proxy: String },
}

/// CW20 receive hook payloads
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent collateral and mint the wrapped amount it backs
    Mint {
        /// Address credited with the wrapped amount
        recipient: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Outstanding wrapped amount backed by the treasury
    #[returns(TreasuryWrappedBalanceResponse)]
    TreasuryWrappedBalance {},

    #[returns(ProxyResponse)]
    Proxy {},

    /// Preview a mint of `amount` collateral (bounds and rate applied)
    #[returns(SimulationResponse)]
    SimulateMint { amount: Uint128 },

    /// Preview a burn releasing `amount` collateral (all burn checks applied)
    #[returns(SimulationResponse)]
    SimulateBurn { amount: Uint128 },

    /// Collateral held against the wrapped ledger
    #[returns(SolvencyResponse)]
    Solvency {},

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub collateral_token: Addr,
    pub wrapped_token: Addr,
    pub custody: Addr,
    pub token_value: Uint128,
    pub decimals: u8,
    pub wrapped_decimals: u8,
    pub upper_bound: Uint128,
    pub lower_bound: Uint128,
    /// Registered proxy, if bound yet
    pub proxy: Option<Addr>,
}

#[cw_serde]
pub struct TreasuryWrappedBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct ProxyResponse {
    pub proxy: Option<Addr>,
}

#[cw_serde]
pub struct SimulationResponse {
    pub collateral_amount: Uint128,
    pub wrapped_amount: Uint128,
    /// Ledger balance after the operation
    pub treasury_wrapped_balance: Uint128,
}

#[cw_serde]
pub struct SolvencyResponse {
    /// Collateral held by the treasury
    pub collateral_balance: Uint128,
    /// Outstanding wrapped ledger
    pub wrapped_balance: Uint128,
    /// Collateral the wrapped ledger is worth
    pub required_collateral: Uint128,
    pub solvent: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_mints: u64,
    pub total_burns: u64,
    pub total_collateral_locked: Uint128,
    pub total_collateral_released: Uint128,
}
