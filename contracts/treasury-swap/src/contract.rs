//! Treasury Swap Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `engine` - Mint/burn ledger rules

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, QuerierWrapper,
    Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::{Cw20QueryMsg, TokenInfoResponse};
use treasury_common::{SwapRate, DEFAULT_WRAPPED_DECIMALS};

use crate::error::ContractError;
use crate::execute::{execute_burn, execute_receive, execute_register_proxy};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_proxy, query_simulate_burn, query_simulate_mint, query_solvency,
    query_stats, query_treasury_wrapped_balance,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS, TREASURY_WRAPPED_BALANCE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let collateral_token = deps.api.addr_validate(&msg.collateral_token)?;
    let wrapped_token = deps.api.addr_validate(&msg.wrapped_token)?;
    let custody = deps.api.addr_validate(&msg.custody)?;

    if collateral_token == wrapped_token {
        return Err(ContractError::InvalidConfig {
            reason: "collateral and wrapped token must differ".to_string(),
        });
    }

    // Bounds
    if msg.lower_bound.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "lower_bound must be greater than zero".to_string(),
        });
    }
    if msg.lower_bound > msg.upper_bound {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "lower_bound {} exceeds upper_bound {}",
                msg.lower_bound, msg.upper_bound
            ),
        });
    }

    // Rate (rejects a zero token value)
    let wrapped_decimals = msg.wrapped_decimals.unwrap_or(DEFAULT_WRAPPED_DECIMALS);
    SwapRate::new(msg.token_value, msg.decimals, wrapped_decimals)?;

    // Configured precisions must match the tokens themselves
    ensure_decimals(deps.querier, &collateral_token, msg.decimals)?;
    ensure_decimals(deps.querier, &wrapped_token, wrapped_decimals)?;

    let config = Config {
        admin,
        collateral_token,
        wrapped_token,
        custody,
        token_value: msg.token_value,
        decimals: msg.decimals,
        wrapped_decimals,
        upper_bound: msg.upper_bound,
        lower_bound: msg.lower_bound,
    };
    CONFIG.save(deps.storage, &config)?;
    TREASURY_WRAPPED_BALANCE.save(deps.storage, &Uint128::zero())?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("collateral_token", config.collateral_token)
        .add_attribute("wrapped_token", config.wrapped_token)
        .add_attribute("custody", config.custody)
        .add_attribute("token_value", config.token_value)
        .add_attribute("decimals", config.decimals.to_string())
        .add_attribute("wrapped_decimals", config.wrapped_decimals.to_string())
        .add_attribute("lower_bound", config.lower_bound)
        .add_attribute("upper_bound", config.upper_bound))
}

fn ensure_decimals(
    querier: QuerierWrapper,
    token: &Addr,
    expected: u8,
) -> Result<(), ContractError> {
    let info: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    if info.decimals != expected {
        return Err(ContractError::DecimalsMismatch {
            token: token.to_string(),
            expected,
            got: info.decimals,
        });
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Swap
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::Burn { amount, recipient } => execute_burn(deps, env, info, amount, recipient),

        // Admin
        ExecuteMsg::RegisterProxy { proxy } => execute_register_proxy(deps, info, proxy),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TreasuryWrappedBalance {} => {
            to_json_binary(&query_treasury_wrapped_balance(deps)?)
        }
        QueryMsg::Proxy {} => to_json_binary(&query_proxy(deps)?),
        QueryMsg::SimulateMint { amount } => to_json_binary(&query_simulate_mint(deps, amount)?),
        QueryMsg::SimulateBurn { amount } => {
            to_json_binary(&query_simulate_burn(deps, env, amount)?)
        }
        QueryMsg::Solvency {} => to_json_binary(&query_solvency(deps, env)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
