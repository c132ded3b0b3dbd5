//! Operator-only access control.
//!
//! The escrow has exactly one privileged identity, fixed at deployment.
//! Callers present their address explicitly; there is no ambient sender.

use wagerbook_types::{Address, Result, WagerbookError};

/// Gate that admits only the operator.
#[derive(Debug, Clone, Copy)]
pub struct AccessControl {
    operator: Address,
}

impl AccessControl {
    /// # Errors
    /// Returns `ZeroOperator` if `operator` is the null address.
    pub fn new(operator: Address) -> Result<Self> {
        if operator.is_zero() {
            return Err(WagerbookError::ZeroOperator);
        }
        Ok(Self { operator })
    }

    #[must_use]
    pub fn operator(&self) -> Address {
        self.operator
    }

    #[must_use]
    pub fn is_operator(&self, caller: Address) -> bool {
        caller == self.operator
    }

    /// Guard a privileged call.
    ///
    /// # Errors
    /// Returns [`WagerbookError::Unauthorized`] if `caller` is not the operator.
    pub fn ensure_operator(&self, caller: Address) -> Result<()> {
        if self.is_operator(caller) {
            Ok(())
        } else {
            Err(WagerbookError::Unauthorized { caller })
        }
    }
}
