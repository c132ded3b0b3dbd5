//! Pause circuit breaker.
//!
//! Blocks opening new wagers while PAUSED. Settlement is gated only when
//! the escrow's [`SettlementPausePolicy`](wagerbook_types::SettlementPausePolicy)
//! says so. Authorization is checked by the engine before any transition.

use wagerbook_types::{PauseState, Result, WagerbookError};

/// Two-state circuit breaker, starting ACTIVE.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseGate {
    state: PauseState,
}

impl PauseGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PauseState {
        self.state
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// ACTIVE → PAUSED.
    ///
    /// # Errors
    /// Returns [`WagerbookError::AlreadyPaused`] if already PAUSED.
    pub fn pause(&mut self) -> Result<()> {
        if self.is_paused() {
            return Err(WagerbookError::AlreadyPaused);
        }
        self.state = PauseState::Paused;
        Ok(())
    }

    /// PAUSED → ACTIVE. Returns whether the state changed; unpausing an
    /// ACTIVE gate is a no-op.
    pub fn unpause(&mut self) -> bool {
        let was_paused = self.is_paused();
        self.state = PauseState::Active;
        was_paused
    }

    /// Guard a gated operation.
    ///
    /// # Errors
    /// Returns [`WagerbookError::Paused`] while PAUSED.
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_paused() {
            Err(WagerbookError::Paused)
        } else {
            Ok(())
        }
    }
}
