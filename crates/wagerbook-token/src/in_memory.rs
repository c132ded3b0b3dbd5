//! In-memory fungible-token ledger.
//!
//! Tracks per-account balances and per-(owner, spender) allowances.
//! All mutations are atomic: every check runs before any balance moves,
//! so a rejected call leaves the ledger unchanged.

use std::collections::HashMap;

use wagerbook_types::{Address, Amount, TokenError};

use crate::token::FungibleToken;

/// Reference token ledger with standard fungible-token semantics.
///
/// An allowance of `Amount::MAX` is treated as unlimited and is not
/// decreased by `transfer_from`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToken {
    /// Per-account balances. Absent means zero.
    balances: HashMap<Address, Amount>,
    /// Per-(owner, spender) allowances. Absent means zero.
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl InMemoryToken {
    /// Create an empty ledger with zero supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger whose entire initial `supply` belongs to `deployer`.
    ///
    /// # Errors
    /// Returns `ZeroAddress` if `deployer` is the null address.
    pub fn with_supply(deployer: Address, supply: Amount) -> Result<Self, TokenError> {
        let mut token = Self::new();
        token.mint(deployer, supply)?;
        Ok(token)
    }

    /// Create new tokens in `to`'s account.
    ///
    /// # Errors
    /// - `ZeroAddress` if `to` is the null address
    /// - `Overflow` if total supply would exceed `Amount::MAX`
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        // Every balance is bounded by the supply, so this cannot overflow.
        *self.balances.entry(to).or_insert(0) += amount;
        self.total_supply = supply;
        tracing::debug!(to = %to, amount, "Tokens minted");
        Ok(())
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|b| **b > 0).count()
    }

    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        if from.is_zero() || to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }
}

impl FungibleToken for InMemoryToken {
    fn balance_of(&self, owner: Address) -> Amount {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn transfer(&mut self, sender: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        self.move_balance(sender, to, amount)?;
        tracing::debug!(from = %sender, to = %to, amount, "Transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let allowed = self.allowance(from, spender);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                needed: amount,
                available: allowed,
            });
        }

        self.move_balance(from, to, amount)?;

        if allowed != Amount::MAX {
            self.allowances.insert((from, spender), allowed - amount);
        }
        tracing::debug!(spender = %spender, from = %from, to = %to, amount, "TransferFrom");
        Ok(())
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Result<(), TokenError> {
        if owner.is_zero() || spender.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        self.allowances.insert((owner, spender), amount);
        tracing::debug!(owner = %owner, spender = %spender, amount, "Approval");
        Ok(())
    }
}
