//! The fungible-token interface.

use wagerbook_types::{Address, Amount, TokenError};

/// A fungible-token ledger.
///
/// Caller identity is explicit on every mutating call: `sender` for
/// `transfer`, `spender` for `transfer_from`, `owner` for `approve`.
/// Implementations must be all-or-nothing per call: a rejected call leaves
/// balances and allowances untouched.
pub trait FungibleToken {
    /// Tokens held by `owner`.
    fn balance_of(&self, owner: Address) -> Amount;

    /// Tokens `spender` may still move out of `owner`'s account.
    fn allowance(&self, owner: Address, spender: Address) -> Amount;

    /// Total tokens in existence.
    fn total_supply(&self) -> Amount;

    /// Move `amount` from `sender` to `to`.
    fn transfer(&mut self, sender: Address, to: Address, amount: Amount)
    -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance previously granted by `from`.
    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Set the allowance of `spender` over `owner`'s tokens to `amount`.
    fn approve(&mut self, owner: Address, spender: Address, amount: Amount)
    -> Result<(), TokenError>;
}
