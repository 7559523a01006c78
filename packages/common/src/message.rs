//! Cross-chain message types
//!
//! The messaging layer delivers an [`InMessage`] to the proxy and consumes the
//! [`OutMessage`] the proxy returns as its response data.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult, Uint128};

/// Method name selecting a treasury mint
pub const MINT_METHOD: &str = "mint(bytes,bytes)";

/// Method name selecting a treasury burn
pub const BURN_METHOD: &str = "burn(bytes,bytes)";

// ============================================================================
// Method Selector
// ============================================================================

/// Proxy entry points reachable from the messaging layer.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ProxyMethod {
    Mint,
    Burn,
}

impl ProxyMethod {
    /// Decode a method name. Returns `None` for anything but the two known
    /// signatures.
    pub fn parse(method_name: &str) -> Option<Self> {
        match method_name {
            MINT_METHOD => Some(ProxyMethod::Mint),
            BURN_METHOD => Some(ProxyMethod::Burn),
            _ => None,
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            ProxyMethod::Mint => MINT_METHOD,
            ProxyMethod::Burn => BURN_METHOD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyMethod::Mint => "mint",
            ProxyMethod::Burn => "burn",
        }
    }
}

// ============================================================================
// Payload Types
// ============================================================================

/// An asset movement: token contract address and exact amount.
#[cw_serde]
pub struct TokenAmount {
    pub token: String,
    pub amount: Uint128,
}

impl TokenAmount {
    pub fn new(token: impl Into<String>, amount: Uint128) -> Self {
        Self {
            token: token.into(),
            amount,
        }
    }
}

/// Arguments carried by both proxy methods, JSON-encoded in
/// [`InMessage::arguments`].
#[cw_serde]
pub struct ProxyArguments {
    /// Address credited by the operation (wrapped credit on mint, released
    /// collateral on burn)
    pub target: String,
    /// Collateral amount (the deposit amount for mint, the amount to release
    /// for burn)
    pub amount: Uint128,
}

impl ProxyArguments {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(arguments: &Binary) -> StdResult<Self> {
        from_json(arguments)
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Inbound message delivered by the messaging layer.
///
/// Deposits and withdrawals have already been applied by the time the proxy
/// sees the message.
#[cw_serde]
pub struct InMessage {
    /// Opaque correlation identifier
    pub query_id: u64,
    /// Operation identifier assigned by the messaging layer
    pub operation_id: String,
    /// Creation time on the originating chain (seconds)
    pub timestamp: u64,
    /// Address of the proxy this message is aimed at
    pub target: String,
    /// Method signature, e.g. `"mint(bytes,bytes)"`
    pub method_name: String,
    /// JSON-encoded [`ProxyArguments`]
    pub arguments: Binary,
    /// Originating wallet on the remote chain
    pub caller: String,
    /// Assets credited to the proxy before the call
    pub deposits: Vec<TokenAmount>,
    /// Assets debited from custody for this call
    pub withdrawals: Vec<TokenAmount>,
    /// Untrusted executor data, propagated unchanged
    pub extra_data: Binary,
}

/// Outbound message returned to the messaging layer.
///
/// Exactly one of `tokens_locked` and `tokens_burned` holds a single entry.
#[cw_serde]
pub struct OutMessage {
    pub query_id: u64,
    pub operation_id: String,
    /// The proxy itself
    pub caller_address: String,
    /// Remote wallet receiving the response (the inbound `caller`)
    pub target_address: String,
    pub payload: Binary,
    /// Tokens minted/locked by a mint
    pub tokens_locked: Vec<TokenAmount>,
    /// Tokens burned by a burn
    pub tokens_burned: Vec<TokenAmount>,
}

impl OutMessage {
    /// Response to a mint: reports the collateral now locked in the treasury.
    pub fn locked(
        request: &InMessage,
        caller_address: impl Into<String>,
        locked: TokenAmount,
    ) -> Self {
        Self {
            tokens_locked: vec![locked],
            ..Self::reply_to(request, caller_address)
        }
    }

    /// Response to a burn: reports the wrapped amount burned from custody.
    pub fn burned(
        request: &InMessage,
        caller_address: impl Into<String>,
        burned: TokenAmount,
    ) -> Self {
        Self {
            tokens_burned: vec![burned],
            ..Self::reply_to(request, caller_address)
        }
    }

    fn reply_to(request: &InMessage, caller_address: impl Into<String>) -> Self {
        Self {
            query_id: request.query_id,
            operation_id: request.operation_id.clone(),
            caller_address: caller_address.into(),
            target_address: request.caller.clone(),
            payload: Binary::default(),
            tokens_locked: vec![],
            tokens_burned: vec![],
        }
    }
}
