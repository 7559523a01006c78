use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;
use treasury_common::{
    InMessage, OutMessage, ProxyArguments, ProxyMethod, SwapRate, TokenAmount,
};
use treasury_swap::msg::{
    ConfigResponse as TreasuryConfigResponse, ExecuteMsg as TreasuryExecuteMsg,
    QueryMsg as TreasuryQueryMsg, ReceiveMsg as TreasuryReceiveMsg,
};

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let treasury = deps.api.addr_validate(&msg.treasury_swap)?;
    let cross_chain_layer = deps.api.addr_validate(&msg.cross_chain_layer)?;

    let treasury_config: TreasuryConfigResponse = deps
        .querier
        .query_wasm_smart(&treasury, &TreasuryQueryMsg::Config {})?;
    let rate = SwapRate::new(
        treasury_config.token_value,
        treasury_config.decimals,
        treasury_config.wrapped_decimals,
    )?;

    let config = Config {
        treasury,
        cross_chain_layer,
        collateral_token: treasury_config.collateral_token,
        wrapped_token: treasury_config.wrapped_token,
        rate,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("treasury", config.treasury)
        .add_attribute("cross_chain_layer", config.cross_chain_layer)
        .add_attribute("collateral_token", config.collateral_token)
        .add_attribute("wrapped_token", config.wrapped_token))
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
        ExecuteMsg::ReceiveMessage { message } => {
            execute_receive_message(deps, env, info, message)
        }
    }
}

fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message: InMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.cross_chain_layer {
        return Err(ContractError::Unauthorized);
    }
    if message.target != env.contract.address.as_str() {
        return Err(ContractError::InvalidTarget {
            expected: env.contract.address.to_string(),
            got: message.target,
        });
    }

    let method =
        ProxyMethod::parse(&message.method_name).ok_or_else(|| ContractError::UnsupportedMethod {
            method: message.method_name.clone(),
        })?;
    let args = ProxyArguments::decode(&message.arguments)?;
    let target = deps.api.addr_validate(&args.target)?;

    let (treasury_msg, out, wrapped_amount) = match method {
        ProxyMethod::Mint => {
            if let Some(withdrawal) = message.withdrawals.first() {
                return Err(ContractError::UnexpectedWithdrawal {
                    token: withdrawal.token.clone(),
                    amount: withdrawal.amount,
                });
            }
            let deposit = single_deposit(&message)?;
            ensure_collateral(&config, &deposit.token)?;
            if deposit.amount != args.amount {
                return Err(ContractError::InvalidAmount {
                    reason: format!(
                        "argument amount {} does not match deposit {}",
                        args.amount, deposit.amount
                    ),
                });
            }

            // Collateral moves to the treasury with the mint hook attached
            let msg = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.collateral_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Send {
                    contract: config.treasury.to_string(),
                    amount: deposit.amount,
                    msg: to_json_binary(&TreasuryReceiveMsg::Mint {
                        recipient: target.to_string(),
                    })?,
                })?,
                funds: vec![],
            });
            let out = OutMessage::locked(
                &message,
                env.contract.address.as_str(),
                TokenAmount::new(config.collateral_token.as_str(), deposit.amount),
            );
            let wrapped_issued = config.rate.collateral_to_wrapped(deposit.amount)?;
            (msg, out, wrapped_issued)
        }
        ProxyMethod::Burn => {
            if let Some(deposit) = message.deposits.first() {
                return Err(ContractError::UnexpectedDeposit {
                    token: deposit.token.clone(),
                    amount: deposit.amount,
                });
            }

            // Custody debit, when reported, must match the collateral released
            match message.withdrawals.as_slice() {
                [] => {}
                [withdrawal] => {
                    ensure_collateral(&config, &withdrawal.token)?;
                    if withdrawal.amount != args.amount {
                        return Err(ContractError::InvalidAmount {
                            reason: format!(
                                "argument amount {} does not match withdrawal {}",
                                args.amount, withdrawal.amount
                            ),
                        });
                    }
                }
                withdrawals => {
                    return Err(ContractError::InvalidAmount {
                        reason: format!(
                            "expected at most one withdrawal, got {}",
                            withdrawals.len()
                        ),
                    });
                }
            }

            // Sizes the reply only; the treasury runs the actual checks
            let wrapped_required = config.rate.collateral_to_wrapped(args.amount)?;

            let msg = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.treasury.to_string(),
                msg: to_json_binary(&TreasuryExecuteMsg::Burn {
                    amount: args.amount,
                    recipient: target.to_string(),
                })?,
                funds: vec![],
            });
            let out = OutMessage::burned(
                &message,
                env.contract.address.as_str(),
                TokenAmount::new(config.wrapped_token.as_str(), wrapped_required),
            );
            (msg, out, wrapped_required)
        }
    };

    Ok(Response::new()
        .add_message(treasury_msg)
        .set_data(to_json_binary(&out)?)
        .add_attribute("action", "receive_message")
        .add_attribute("method", method.as_str())
        .add_attribute("method_name", method.signature())
        .add_attribute("query_id", message.query_id.to_string())
        .add_attribute("operation_id", message.operation_id)
        .add_attribute("caller", message.caller)
        .add_attribute("target", target)
        .add_attribute("collateral_amount", args.amount)
        .add_attribute("wrapped_amount", wrapped_amount))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        treasury: config.treasury,
        cross_chain_layer: config.cross_chain_layer,
        collateral_token: config.collateral_token,
        wrapped_token: config.wrapped_token,
        token_value: config.rate.token_value,
        decimals: config.rate.collateral_decimals,
        wrapped_decimals: config.rate.wrapped_decimals,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn single_deposit(message: &InMessage) -> Result<&TokenAmount, ContractError> {
    match message.deposits.as_slice() {
        [] => Err(ContractError::NoFundsSent),
        [deposit] => Ok(deposit),
        deposits => Err(ContractError::InvalidAmount {
            reason: format!("expected exactly one deposit, got {}", deposits.len()),
        }),
    }
}

fn ensure_collateral(config: &Config, token: &str) -> Result<(), ContractError> {
    if token != config.collateral_token.as_str() {
        return Err(ContractError::UnexpectedAsset {
            expected: config.collateral_token.to_string(),
            got: token.to_string(),
        });
    }
    Ok(())
}
