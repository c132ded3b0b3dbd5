//! Custody conservation audit.
//!
//! Invariants checked against the token ledger:
//! ```text
//! pulled_in - paid_out == Σ outstanding pots
//! balance_of(custody)  >= Σ outstanding pots
//! ```
//!
//! The second is an inequality: anyone may send tokens straight to the
//! custody account, and those are surplus rather than a violation.

use wagerbook_types::{Amount, Result, WagerbookError};

/// Running totals of funds moved through custody by committed operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustodyAudit {
    /// Stakes pulled in by committed `start_game` calls.
    pulled_in: Amount,
    /// Pots paid out by committed `pay_out_winner` calls.
    paid_out: Amount,
}

impl CustodyAudit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pull(&mut self, amount: Amount) {
        self.pulled_in = self.pulled_in.saturating_add(amount);
    }

    pub fn record_payout(&mut self, amount: Amount) {
        self.paid_out = self.paid_out.saturating_add(amount);
    }

    #[must_use]
    pub fn total_pulled_in(&self) -> Amount {
        self.pulled_in
    }

    #[must_use]
    pub fn total_paid_out(&self) -> Amount {
        self.paid_out
    }

    /// What should currently be held on behalf of players.
    #[must_use]
    pub fn expected_in_custody(&self) -> Amount {
        self.pulled_in.saturating_sub(self.paid_out)
    }

    /// Check bookkeeping against the ledger total and the custody balance.
    ///
    /// # Errors
    /// Returns [`WagerbookError::CustodyInvariantViolation`] if either
    /// invariant fails.
    pub fn verify(&self, ledger_total: Amount, custody_balance: Amount) -> Result<()> {
        let expected = self.expected_in_custody();
        if expected != ledger_total || self.paid_out > self.pulled_in {
            return Err(WagerbookError::CustodyInvariantViolation {
                reason: format!(
                    "ledger total {ledger_total} != expected {expected} \
                     (pulled_in={}, paid_out={})",
                    self.pulled_in, self.paid_out,
                ),
            });
        }
        if custody_balance < ledger_total {
            return Err(WagerbookError::CustodyInvariantViolation {
                reason: format!(
                    "custody balance {custody_balance} does not cover outstanding pots {ledger_total}"
                ),
            });
        }
        Ok(())
    }
}
