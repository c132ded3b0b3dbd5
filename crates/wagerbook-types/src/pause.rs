//! Circuit-breaker state.
//!
//! ```text
//!   ┌────────┐   pause    ┌────────┐
//!   │ ACTIVE ├───────────▶│ PAUSED │
//!   └────────┘◀───────────┴────────┘
//!               unpause
//! ```
//!
//! While PAUSED no new wagers may be opened. Funds already in custody are
//! unaffected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two states of the pause circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PauseState {
    /// New wagers may be opened.
    #[default]
    Active,
    /// New wagers are halted.
    Paused,
}

impl PauseState {
    #[must_use]
    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }
}

impl fmt::Display for PauseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Paused => write!(f, "PAUSED"),
        }
    }
}
