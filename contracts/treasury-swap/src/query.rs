//! Query handlers for the Treasury Swap contract.

use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use crate::engine::{CollateralCustody, Cw20Custody, TreasuryLedger, VerifiedDeposit};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ProxyResponse, SimulationResponse, SolvencyResponse, StatsResponse,
    TreasuryWrappedBalanceResponse,
};
use crate::state::{CONFIG, PROXY, STATS, TREASURY_WRAPPED_BALANCE};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        collateral_token: config.collateral_token,
        wrapped_token: config.wrapped_token,
        custody: config.custody,
        token_value: config.token_value,
        decimals: config.decimals,
        wrapped_decimals: config.wrapped_decimals,
        upper_bound: config.upper_bound,
        lower_bound: config.lower_bound,
        proxy: PROXY.may_load(deps.storage)?,
    })
}

pub fn query_treasury_wrapped_balance(deps: Deps) -> StdResult<TreasuryWrappedBalanceResponse> {
    let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;
    Ok(TreasuryWrappedBalanceResponse { balance })
}

pub fn query_proxy(deps: Deps) -> StdResult<ProxyResponse> {
    Ok(ProxyResponse {
        proxy: PROXY.may_load(deps.storage)?,
    })
}

/// Preview a mint without touching state.
pub fn query_simulate_mint(deps: Deps, amount: Uint128) -> StdResult<SimulationResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;

    let mut ledger = TreasuryLedger::new(&config, balance).map_err(into_std)?;
    let wrapped_amount = ledger
        .mint(&VerifiedDeposit {
            token: config.collateral_token.clone(),
            amount,
        })
        .map_err(into_std)?;

    Ok(SimulationResponse {
        collateral_amount: amount,
        wrapped_amount,
        treasury_wrapped_balance: ledger.wrapped_balance(),
    })
}

/// Preview a burn without touching state.
pub fn query_simulate_burn(deps: Deps, env: Env, amount: Uint128) -> StdResult<SimulationResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;
    let custody = Cw20Custody::new(deps.querier, &config.collateral_token, &env.contract.address);

    let mut ledger = TreasuryLedger::new(&config, balance).map_err(into_std)?;
    let wrapped_amount = ledger.burn(amount, &custody).map_err(into_std)?;

    Ok(SimulationResponse {
        collateral_amount: amount,
        wrapped_amount,
        treasury_wrapped_balance: ledger.wrapped_balance(),
    })
}

/// Compare the collateral held with what the wrapped ledger is worth.
pub fn query_solvency(deps: Deps, env: Env) -> StdResult<SolvencyResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;
    let custody = Cw20Custody::new(deps.querier, &config.collateral_token, &env.contract.address);

    let ledger = TreasuryLedger::new(&config, balance).map_err(into_std)?;
    let required_collateral = ledger.required_collateral().map_err(into_std)?;
    let collateral_balance = custody.collateral_balance()?;

    Ok(SolvencyResponse {
        collateral_balance,
        wrapped_balance: balance,
        required_collateral,
        solvent: collateral_balance >= required_collateral,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_mints: stats.total_mints,
        total_burns: stats.total_burns,
        total_collateral_locked: stats.total_collateral_locked,
        total_collateral_released: stats.total_collateral_released,
    })
}

fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        other => StdError::generic_err(other.to_string()),
    }
}
