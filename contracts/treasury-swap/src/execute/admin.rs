//! Admin handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, PROXY};

/// Bind the proxy allowed to mint and burn. The binding is permanent.
pub fn execute_register_proxy(
    deps: DepsMut,
    info: MessageInfo,
    proxy: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(existing) = PROXY.may_load(deps.storage)? {
        return Err(ContractError::ProxyAlreadyRegistered {
            proxy: existing.to_string(),
        });
    }

    let proxy = deps.api.addr_validate(&proxy)?;
    PROXY.save(deps.storage, &proxy)?;

    Ok(Response::new()
        .add_attribute("action", "register_proxy")
        .add_attribute("proxy", proxy))
}
