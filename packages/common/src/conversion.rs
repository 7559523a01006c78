//! Conversion Math
//!
//! Integer-only conversion between a collateral amount (at the collateral
//! token's precision) and a wrapped amount (at the wrapped token's precision).
//!
//! ## Rate
//!
//! `token_value` is the collateral amount, expressed at collateral decimals,
//! that one whole wrapped unit (`10^wrapped_decimals` base units) represents.
//!
//! | Direction             | Formula                                        |
//! |-----------------------|------------------------------------------------|
//! | collateral → wrapped  | `collateral * 10^wrapped_decimals / token_value` |
//! | wrapped → collateral  | `wrapped * token_value / 10^wrapped_decimals`    |
//!
//! ## Rounding
//!
//! Both directions round DOWN. The treasury never issues more wrapped value
//! than the collateral it receives backs, and never releases more collateral
//! than a wrapped amount is worth. Products are taken at 256-bit width, so the
//! only overflow left is a result that does not fit in 128 bits.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CheckedMultiplyRatioError, Uint128};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Wrapped asset precision (base-chain native unit, 9 decimals)
pub const DEFAULT_WRAPPED_DECIMALS: u8 = 9;

/// Largest precision whose scale factor fits in a `Uint128`
pub const MAX_DECIMALS: u8 = 38;

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Arithmetic overflow in conversion")]
    ArithmeticOverflow,

    #[error("Token value must be greater than zero")]
    ZeroTokenValue,

    #[error("Unsupported decimals: {decimals} (max {max})")]
    UnsupportedDecimals { decimals: u8, max: u8 },
}

impl From<CheckedMultiplyRatioError> for ConversionError {
    fn from(err: CheckedMultiplyRatioError) -> Self {
        match err {
            CheckedMultiplyRatioError::DivideByZero => ConversionError::ZeroTokenValue,
            _ => ConversionError::ArithmeticOverflow,
        }
    }
}

// ============================================================================
// Swap Rate
// ============================================================================

/// A validated conversion rate between collateral and wrapped amounts.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct SwapRate {
    /// Collateral amount (at collateral decimals) worth one whole wrapped unit
    pub token_value: Uint128,
    /// Collateral token precision that `token_value` is expressed in
    pub collateral_decimals: u8,
    /// Wrapped token precision
    pub wrapped_decimals: u8,
}

impl SwapRate {
    /// Build a rate, rejecting a zero token value and precisions whose scale
    /// factor cannot be represented.
    pub fn new(
        token_value: Uint128,
        collateral_decimals: u8,
        wrapped_decimals: u8,
    ) -> Result<Self, ConversionError> {
        if token_value.is_zero() {
            return Err(ConversionError::ZeroTokenValue);
        }
        for decimals in [collateral_decimals, wrapped_decimals] {
            if decimals > MAX_DECIMALS {
                return Err(ConversionError::UnsupportedDecimals {
                    decimals,
                    max: MAX_DECIMALS,
                });
            }
        }
        Ok(Self {
            token_value,
            collateral_decimals,
            wrapped_decimals,
        })
    }

    /// `10^wrapped_decimals`, the number of base units in one wrapped unit.
    pub fn wrapped_unit(&self) -> Result<Uint128, ConversionError> {
        scale_factor(self.wrapped_decimals)
    }

    /// Wrapped amount backed by `collateral_amount`, rounded down.
    pub fn collateral_to_wrapped(
        &self,
        collateral_amount: Uint128,
    ) -> Result<Uint128, ConversionError> {
        if self.token_value.is_zero() {
            return Err(ConversionError::ZeroTokenValue);
        }
        let unit = self.wrapped_unit()?;
        Ok(collateral_amount.checked_multiply_ratio(unit, self.token_value)?)
    }

    /// Collateral amount a `wrapped_amount` is worth, rounded down.
    pub fn wrapped_to_collateral(
        &self,
        wrapped_amount: Uint128,
    ) -> Result<Uint128, ConversionError> {
        let unit = self.wrapped_unit()?;
        Ok(wrapped_amount.checked_multiply_ratio(self.token_value, unit)?)
    }
}

/// `10^decimals` as a `Uint128`.
pub fn scale_factor(decimals: u8) -> Result<Uint128, ConversionError> {
    Uint128::new(10)
        .checked_pow(decimals as u32)
        .map_err(|_| ConversionError::ArithmeticOverflow)
}

/// Convert a collateral amount into the wrapped amount it backs (floored).
pub fn collateral_to_wrapped(
    collateral_amount: Uint128,
    token_value: Uint128,
    collateral_decimals: u8,
    wrapped_decimals: u8,
) -> Result<Uint128, ConversionError> {
    SwapRate::new(token_value, collateral_decimals, wrapped_decimals)?
        .collateral_to_wrapped(collateral_amount)
}

/// Convert a wrapped amount into the collateral it is worth (floored).
pub fn wrapped_to_collateral(
    wrapped_amount: Uint128,
    token_value: Uint128,
    collateral_decimals: u8,
    wrapped_decimals: u8,
) -> Result<Uint128, ConversionError> {
    SwapRate::new(token_value, collateral_decimals, wrapped_decimals)?
        .wrapped_to_collateral(wrapped_amount)
}

// ============================================================================
// Tests
// ============================================================================
