//! Message types for the Treasury Swap proxy

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use treasury_common::InMessage;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Treasury Swap contract (must already be instantiated)
    pub treasury_swap: String,
    /// Cross-chain layer address delivering inbound messages
    pub cross_chain_layer: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Handle one inbound cross-chain message. The outbound
    /// [`treasury_common::OutMessage`] is returned as response data.
    ///
    /// Authorization: cross-chain layer only
    ReceiveMessage { message: InMessage },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub treasury: Addr,
    pub cross_chain_layer: Addr,
    pub collateral_token: Addr,
    pub wrapped_token: Addr,
    pub token_value: Uint128,
    pub decimals: u8,
    pub wrapped_decimals: u8,
}
