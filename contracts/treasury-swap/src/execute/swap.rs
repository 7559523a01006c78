//! Mint and burn handlers.
//!
//! Both handlers run the ledger in memory first and write storage only once
//! every check has passed.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::engine::{Cw20Custody, TreasuryLedger, VerifiedDeposit};
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, PROXY, STATS, TREASURY_WRAPPED_BALANCE};

/// Execute handler for collateral arriving through CW20 `Send`
pub fn execute_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    ensure_proxy(deps.storage, &sender)?;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Mint { recipient } => {
            let recipient = deps.api.addr_validate(&recipient)?;

            // The token contract calling us is the asset that moved
            let deposit = VerifiedDeposit {
                token: info.sender,
                amount: cw20_msg.amount,
            };

            let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;
            let mut ledger = TreasuryLedger::new(&config, balance)?;
            let wrapped_issued = ledger.mint(&deposit)?;
            let new_balance = ledger.wrapped_balance();

            TREASURY_WRAPPED_BALANCE.save(deps.storage, &new_balance)?;

            let mut stats = STATS.load(deps.storage)?;
            stats.total_mints += 1;
            stats.total_collateral_locked += deposit.amount;
            STATS.save(deps.storage, &stats)?;

            let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.wrapped_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                    recipient: recipient.to_string(),
                    amount: wrapped_issued,
                })?,
                funds: vec![],
            });

            Ok(Response::new()
                .add_message(mint_msg)
                .add_attribute("action", "mint")
                .add_attribute("sender", sender)
                .add_attribute("recipient", recipient)
                .add_attribute("collateral_token", deposit.token)
                .add_attribute("collateral_amount", deposit.amount)
                .add_attribute("wrapped_amount", wrapped_issued)
                .add_attribute("treasury_wrapped_balance", new_balance))
        }
    }
}

/// Execute handler releasing collateral against the wrapped ledger
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_proxy(deps.storage, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;

    let custody = Cw20Custody::new(deps.querier, &config.collateral_token, &env.contract.address);
    let balance = TREASURY_WRAPPED_BALANCE.load(deps.storage)?;
    let mut ledger = TreasuryLedger::new(&config, balance)?;
    let wrapped_required = ledger.burn(amount, &custody)?;
    let new_balance = ledger.wrapped_balance();

    TREASURY_WRAPPED_BALANCE.save(deps.storage, &new_balance)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_burns += 1;
    stats.total_collateral_released += amount;
    STATS.save(deps.storage, &stats)?;

    let messages: Vec<CosmosMsg> = vec![
        // Release collateral
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.collateral_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
        // Burn the wrapped side from custody (allowance granted by custody)
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.wrapped_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
                owner: config.custody.to_string(),
                amount: wrapped_required,
            })?,
            funds: vec![],
        }),
    ];

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("collateral_amount", amount)
        .add_attribute("wrapped_amount", wrapped_required)
        .add_attribute("custody", config.custody)
        .add_attribute("treasury_wrapped_balance", new_balance))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn ensure_proxy(storage: &dyn Storage, caller: &Addr) -> Result<(), ContractError> {
    let proxy = PROXY
        .may_load(storage)?
        .ok_or(ContractError::ProxyNotRegistered)?;
    if *caller != proxy {
        return Err(ContractError::UnauthorizedCaller);
    }
    Ok(())
}
