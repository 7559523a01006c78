//! Treasury Swap engine
//!
//! [`TreasuryLedger`] applies mint and burn to an in-memory copy of the
//! wrapped ledger. Every check runs before the balance changes, so a failed
//! call leaves the ledger exactly as it was. The contract layer persists the
//! new balance only after the ledger call returns `Ok`.
//!
//! The engine never looks at chain state directly: deposits arrive as a
//! [`VerifiedDeposit`] and the collateral balance comes from a
//! [`CollateralCustody`].

use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};
use treasury_common::SwapRate;

use crate::error::ContractError;
use crate::state::Config;

// ============================================================================
// Custody
// ============================================================================

/// Source of the collateral balance held by the treasury.
pub trait CollateralCustody {
    fn collateral_balance(&self) -> StdResult<Uint128>;
}

/// Custody backed by a CW20 balance query.
pub struct Cw20Custody<'a> {
    querier: QuerierWrapper<'a>,
    token: &'a Addr,
    holder: &'a Addr,
}

impl<'a> Cw20Custody<'a> {
    pub fn new(querier: QuerierWrapper<'a>, token: &'a Addr, holder: &'a Addr) -> Self {
        Self {
            querier,
            token,
            holder,
        }
    }
}

impl CollateralCustody for Cw20Custody<'_> {
    fn collateral_balance(&self) -> StdResult<Uint128> {
        let res: BalanceResponse = self.querier.query_wasm_smart(
            self.token,
            &Cw20QueryMsg::Balance {
                address: self.holder.to_string(),
            },
        )?;
        Ok(res.balance)
    }
}

/// Collateral that has already arrived in custody, attested by the token
/// contract that moved it.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedDeposit {
    pub token: Addr,
    pub amount: Uint128,
}

// ============================================================================
// Ledger
// ============================================================================

pub struct TreasuryLedger<'a> {
    config: &'a Config,
    rate: SwapRate,
    wrapped_balance: Uint128,
}

impl<'a> TreasuryLedger<'a> {
    pub fn new(config: &'a Config, wrapped_balance: Uint128) -> Result<Self, ContractError> {
        Ok(Self {
            config,
            rate: config.rate()?,
            wrapped_balance,
        })
    }

    pub fn wrapped_balance(&self) -> Uint128 {
        self.wrapped_balance
    }

    /// Collateral the current wrapped balance is worth at the configured rate.
    pub fn required_collateral(&self) -> Result<Uint128, ContractError> {
        Ok(self.rate.wrapped_to_collateral(self.wrapped_balance)?)
    }

    /// Credit a collateral deposit. Returns the wrapped amount issued.
    pub fn mint(&mut self, deposit: &VerifiedDeposit) -> Result<Uint128, ContractError> {
        if deposit.token != self.config.collateral_token {
            return Err(ContractError::UnexpectedAsset {
                expected: self.config.collateral_token.to_string(),
                got: deposit.token.to_string(),
            });
        }
        self.check_bounds(deposit.amount)?;

        let wrapped_issued = self.convert(deposit.amount)?;
        self.wrapped_balance = self
            .wrapped_balance
            .checked_add(wrapped_issued)
            .map_err(|_| ContractError::ArithmeticOverflow)?;

        Ok(wrapped_issued)
    }

    /// Release `collateral_amount`. Returns the wrapped amount that must be
    /// burned for it.
    pub fn burn(
        &mut self,
        collateral_amount: Uint128,
        custody: &dyn CollateralCustody,
    ) -> Result<Uint128, ContractError> {
        self.check_bounds(collateral_amount)?;

        let wrapped_required = self.convert(collateral_amount)?;
        if wrapped_required > self.wrapped_balance {
            return Err(ContractError::InsufficientLedgerBalance {
                required: wrapped_required,
                available: self.wrapped_balance,
            });
        }

        let available = custody.collateral_balance()?;
        if available < collateral_amount {
            return Err(ContractError::InsufficientCollateral {
                required: collateral_amount,
                available,
            });
        }

        self.wrapped_balance -= wrapped_required;
        Ok(wrapped_required)
    }

    fn check_bounds(&self, amount: Uint128) -> Result<(), ContractError> {
        if amount < self.config.lower_bound || amount > self.config.upper_bound {
            return Err(ContractError::OutOfBounds {
                amount,
                lower_bound: self.config.lower_bound,
                upper_bound: self.config.upper_bound,
            });
        }
        Ok(())
    }

    /// Collateral to wrapped at the configured rate; zero is never a valid
    /// conversion result.
    fn convert(&self, collateral_amount: Uint128) -> Result<Uint128, ContractError> {
        let wrapped = self.rate.collateral_to_wrapped(collateral_amount)?;
        if wrapped.is_zero() {
            return Err(ContractError::ZeroConversion {
                amount: collateral_amount,
            });
        }
        Ok(wrapped)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::StdError;
    use std::cell::Cell;

    const TOKEN_VALUE: u128 = 6_400_000_000_000_000_000;
    const LOWER_BOUND: u128 = 50_000_000_000_000_000;
    const UPPER_BOUND: u128 = 10_000_000_000_000_000_000_000;

    /// In-memory custody whose balance tests can move around.
    struct FakeCustody {
        balance: Cell<Uint128>,
    }

    impl FakeCustody {
        fn with_balance(balance: u128) -> Self {
            Self {
                balance: Cell::new(Uint128::new(balance)),
            }
        }

        fn deposit(&self, amount: Uint128) {
            self.balance.set(self.balance.get() + amount);
        }

        fn release(&self, amount: Uint128) {
            self.balance.set(self.balance.get() - amount);
        }
    }

    impl CollateralCustody for FakeCustody {
        fn collateral_balance(&self) -> StdResult<Uint128> {
            Ok(self.balance.get())
        }
    }

    struct BrokenCustody;

    impl CollateralCustody for BrokenCustody {
        fn collateral_balance(&self) -> StdResult<Uint128> {
            Err(StdError::generic_err("custody unavailable"))
        }
    }

    fn config() -> Config {
        Config {
            admin: Addr::unchecked("admin"),
            collateral_token: Addr::unchecked("collateral"),
            wrapped_token: Addr::unchecked("wrapped"),
            custody: Addr::unchecked("custody"),
            token_value: Uint128::new(TOKEN_VALUE),
            decimals: 18,
            wrapped_decimals: 9,
            upper_bound: Uint128::new(UPPER_BOUND),
            lower_bound: Uint128::new(LOWER_BOUND),
        }
    }

    fn deposit(amount: u128) -> VerifiedDeposit {
        VerifiedDeposit {
            token: Addr::unchecked("collateral"),
            amount: Uint128::new(amount),
        }
    }

    #[test]
    fn test_mint_one_unit() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::zero()).unwrap();

        let issued = ledger.mint(&deposit(TOKEN_VALUE)).unwrap();
        assert_eq!(issued, Uint128::new(1_000_000_000));
        assert_eq!(ledger.wrapped_balance(), Uint128::new(1_000_000_000));
    }

    #[test]
    fn test_burn_after_mint_restores_ledger() {
        let config = config();
        let custody = FakeCustody::with_balance(0);
        let mut ledger = TreasuryLedger::new(&config, Uint128::zero()).unwrap();

        custody.deposit(Uint128::new(TOKEN_VALUE));
        ledger.mint(&deposit(TOKEN_VALUE)).unwrap();

        let required = ledger.burn(Uint128::new(TOKEN_VALUE), &custody).unwrap();
        assert_eq!(required, Uint128::new(1_000_000_000));
        assert_eq!(ledger.wrapped_balance(), Uint128::zero());
    }

    #[test]
    fn test_mint_burn_round_trip_over_bound_range() {
        let config = config();
        let amounts: [u128; 6] = [
            LOWER_BOUND,
            LOWER_BOUND + 1,
            TOKEN_VALUE - 1,
            TOKEN_VALUE * 3 + 6_399_999_999,
            123_456_789_123_456_789_123,
            UPPER_BOUND,
        ];

        for amount in amounts {
            let custody = FakeCustody::with_balance(0);
            let start = Uint128::new(777);
            let mut ledger = TreasuryLedger::new(&config, start).unwrap();

            custody.deposit(Uint128::new(amount));
            let issued = ledger.mint(&deposit(amount)).unwrap();
            let required = ledger.burn(Uint128::new(amount), &custody).unwrap();

            assert_eq!(issued, required);
            assert_eq!(ledger.wrapped_balance(), start, "amount {}", amount);
        }
    }

    #[test]
    fn test_ledger_stays_backed_by_custody() {
        let config = config();
        let custody = FakeCustody::with_balance(0);
        let mut ledger = TreasuryLedger::new(&config, Uint128::zero()).unwrap();

        let deposits: [u128; 4] = [
            TOKEN_VALUE,
            LOWER_BOUND + 12_345,
            987_654_321_987_654_321,
            TOKEN_VALUE * 2 + 1,
        ];
        for amount in deposits {
            custody.deposit(Uint128::new(amount));
            ledger.mint(&deposit(amount)).unwrap();
            assert!(ledger.required_collateral().unwrap() <= custody.collateral_balance().unwrap());
        }

        let release = Uint128::new(LOWER_BOUND * 4);
        ledger.burn(release, &custody).unwrap();
        custody.release(release);
        assert!(ledger.required_collateral().unwrap() <= custody.collateral_balance().unwrap());
    }

    #[test]
    fn test_mint_out_of_bounds() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(5)).unwrap();

        for amount in [LOWER_BOUND - 1, UPPER_BOUND + 1] {
            let err = ledger.mint(&deposit(amount)).unwrap_err();
            assert_eq!(
                err,
                ContractError::OutOfBounds {
                    amount: Uint128::new(amount),
                    lower_bound: Uint128::new(LOWER_BOUND),
                    upper_bound: Uint128::new(UPPER_BOUND),
                }
            );
            assert_eq!(ledger.wrapped_balance(), Uint128::new(5));
        }
    }

    #[test]
    fn test_mint_unexpected_asset() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::zero()).unwrap();

        let err = ledger
            .mint(&VerifiedDeposit {
                token: Addr::unchecked("wrapped"),
                amount: Uint128::new(TOKEN_VALUE),
            })
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::UnexpectedAsset {
                expected: "collateral".to_string(),
                got: "wrapped".to_string(),
            }
        );
        assert_eq!(ledger.wrapped_balance(), Uint128::zero());
    }

    #[test]
    fn test_zero_conversion_rejected() {
        // Lower bound below the value of one wrapped base unit (6.4e9)
        let mut config = config();
        config.lower_bound = Uint128::one();
        let custody = FakeCustody::with_balance(TOKEN_VALUE);
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(10)).unwrap();

        let err = ledger.mint(&deposit(6_399_999_999)).unwrap_err();
        assert_eq!(
            err,
            ContractError::ZeroConversion {
                amount: Uint128::new(6_399_999_999)
            }
        );

        let err = ledger.burn(Uint128::new(1_000), &custody).unwrap_err();
        assert_eq!(
            err,
            ContractError::ZeroConversion {
                amount: Uint128::new(1_000)
            }
        );
        assert_eq!(ledger.wrapped_balance(), Uint128::new(10));
    }

    #[test]
    fn test_burn_insufficient_ledger_balance() {
        let config = config();
        let custody = FakeCustody::with_balance(UPPER_BOUND);
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(999_999_999)).unwrap();

        let err = ledger.burn(Uint128::new(TOKEN_VALUE), &custody).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientLedgerBalance {
                required: Uint128::new(1_000_000_000),
                available: Uint128::new(999_999_999),
            }
        );
        assert_eq!(ledger.wrapped_balance(), Uint128::new(999_999_999));
    }

    #[test]
    fn test_burn_insufficient_collateral() {
        let config = config();
        let custody = FakeCustody::with_balance(TOKEN_VALUE - 1);
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(1_000_000_000)).unwrap();

        let err = ledger.burn(Uint128::new(TOKEN_VALUE), &custody).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientCollateral {
                required: Uint128::new(TOKEN_VALUE),
                available: Uint128::new(TOKEN_VALUE - 1),
            }
        );
        assert_eq!(ledger.wrapped_balance(), Uint128::new(1_000_000_000));
    }

    #[test]
    fn test_burn_out_of_bounds_skips_custody() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(1_000_000_000)).unwrap();

        let err = ledger
            .burn(Uint128::new(UPPER_BOUND + 1), &BrokenCustody)
            .unwrap_err();
        assert!(matches!(err, ContractError::OutOfBounds { .. }));
    }

    #[test]
    fn test_custody_failure_propagates() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::new(1_000_000_000)).unwrap();

        let err = ledger
            .burn(Uint128::new(TOKEN_VALUE), &BrokenCustody)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::Std(StdError::generic_err("custody unavailable"))
        );
        assert_eq!(ledger.wrapped_balance(), Uint128::new(1_000_000_000));
    }

    #[test]
    fn test_mint_ledger_overflow() {
        let config = config();
        let mut ledger = TreasuryLedger::new(&config, Uint128::MAX).unwrap();

        let err = ledger.mint(&deposit(TOKEN_VALUE)).unwrap_err();
        assert_eq!(err, ContractError::ArithmeticOverflow);
        assert_eq!(ledger.wrapped_balance(), Uint128::MAX);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut config = config();
        config.token_value = Uint128::zero();
        assert!(matches!(
            TreasuryLedger::new(&config, Uint128::zero()),
            Err(ContractError::InvalidConfig { .. })
        ));
    }
}
