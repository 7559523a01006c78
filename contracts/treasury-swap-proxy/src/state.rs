use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use treasury_common::SwapRate;

pub const CONTRACT_NAME: &str = "crates.io:treasury-swap-proxy";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Proxy configuration, fixed at instantiation.
///
/// Token addresses and the rate are copied from the treasury, whose
/// configuration never changes after instantiate.
#[cw_serde]
pub struct Config {
    /// Treasury Swap contract this proxy drives
    pub treasury: Addr,
    /// Only sender allowed to deliver inbound messages
    pub cross_chain_layer: Addr,
    pub collateral_token: Addr,
    pub wrapped_token: Addr,
    pub rate: SwapRate,
}

pub const CONFIG: Item<Config> = Item::new("config");
