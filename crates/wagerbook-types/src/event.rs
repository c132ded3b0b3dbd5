//! Notifications emitted by the escrow.
//!
//! Every state-changing operation appends one [`EscrowEvent`] to the
//! engine's event log, forming an append-only audit trail that off-chain
//! indexers can replay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, Amount};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowEventKind {
    /// Both stakes were pulled into custody.
    GameStarted {
        player_a: Address,
        player_b: Address,
        pot: Amount,
    },
    /// The pot was paid out to the winner.
    GameEnded {
        player_a: Address,
        player_b: Address,
        winner: Address,
        pot: Amount,
    },
    /// The circuit breaker was engaged.
    Paused { operator: Address },
    /// The circuit breaker was released.
    Unpaused { operator: Address },
}

impl std::fmt::Display for EscrowEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameStarted { .. } => write!(f, "GAME_STARTED"),
            Self::GameEnded { .. } => write!(f, "GAME_ENDED"),
            Self::Paused { .. } => write!(f, "PAUSED"),
            Self::Unpaused { .. } => write!(f, "UNPAUSED"),
        }
    }
}

/// A timestamped, sequenced escrow notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowEvent {
    /// Position in the engine's event log, starting at 0.
    pub sequence: u64,
    /// The escrow custody account that emitted this event.
    pub emitter: Address,
    pub kind: EscrowEventKind,
    pub emitted_at: DateTime<Utc>,
}

impl EscrowEvent {
    #[must_use]
    pub fn new(sequence: u64, emitter: Address, kind: EscrowEventKind) -> Self {
        Self {
            sequence,
            emitter,
            kind,
            emitted_at: Utc::now(),
        }
    }
}
