//! Error types for the Wagerbook escrow.
//!
//! All errors use the `WB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Authorization errors
//! - 2xx: Validation errors
//! - 3xx: Circuit-breaker state errors
//! - 4xx: Token collaborator errors
//! - 8xx: Invariant violations
//! - 9xx: General / internal errors

use std::fmt;

use thiserror::Error;

use crate::{Address, Amount};

/// Rejections reported by the fungible-token collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Sender does not hold enough tokens.
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// Spender has not been approved for enough tokens.
    #[error("insufficient allowance: need {needed}, approved {available}")]
    InsufficientAllowance { needed: Amount, available: Amount },

    /// Transfers and approvals involving the null address are rejected.
    #[error("zero address")]
    ZeroAddress,

    /// A balance or supply would exceed `Amount::MAX`.
    #[error("amount overflow")]
    Overflow,
}

/// Central error enum for all Wagerbook operations.
#[derive(Debug, Error)]
pub enum WagerbookError {
    // =================================================================
    // Authorization (1xx)
    // =================================================================
    /// The caller is not the escrow operator.
    #[error("WB_ERR_100: Caller {caller} is not the operator")]
    Unauthorized { caller: Address },

    // =================================================================
    // Validation (2xx)
    // =================================================================
    /// A player is the null address.
    #[error("WB_ERR_200: Player can't be the 0 address")]
    ZeroAddress,

    /// Both sides of the wager name the same account.
    #[error("WB_ERR_201: A player can't bet against themselves: {0}")]
    SamePlayer(Address),

    /// The per-player stake is zero.
    #[error("WB_ERR_202: Wager must be greater than zero")]
    ZeroWager,

    /// Doubling the stake overflows the amount type.
    #[error("WB_ERR_203: Pot overflow for stake {stake}")]
    PotOverflow { stake: Amount },

    /// The pair already has an outstanding wager.
    #[error("WB_ERR_204: You can't place another bet")]
    DuplicateBet,

    /// Settlement requested for a pair with nothing in custody.
    #[error("WB_ERR_205: No outstanding bet between {a} and {b}")]
    NoOutstandingBet { a: Address, b: Address },

    /// The declared winner is not one of the two players.
    #[error("WB_ERR_206: Winner {0} is not a participant of this bet")]
    WinnerNotParticipant(Address),

    /// Malformed address text.
    #[error("WB_ERR_207: Invalid address: {0}")]
    InvalidAddress(String),

    /// The declared winner is the null address.
    #[error("WB_ERR_208: Winner can't be the 0 address")]
    ZeroWinner,

    /// The declared winner is the escrow's own custody account.
    #[error("WB_ERR_209: Winner {0} is the escrow custody account")]
    WinnerIsCustody(Address),

    /// The escrow is being deployed with the null address as operator.
    #[error("WB_ERR_210: Operator can't be the 0 address")]
    ZeroOperator,

    // =================================================================
    // Circuit breaker (3xx)
    // =================================================================
    /// Operation blocked because the escrow is paused.
    #[error("WB_ERR_300: Pausable: paused")]
    Paused,

    /// `pause` called while already paused.
    #[error("WB_ERR_301: Pausable: already paused")]
    AlreadyPaused,

    // =================================================================
    // Token collaborator (4xx)
    // =================================================================
    /// The token ledger rejected a transfer.
    #[error("WB_ERR_400: Token transfer rejected: {0}")]
    Token(#[from] TokenError),

    // =================================================================
    // Invariants (8xx)
    // =================================================================
    /// Custodied balance no longer covers the outstanding pots.
    #[error("WB_ERR_800: Custody invariant violation: {reason}")]
    CustodyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (unreadable file, malformed JSON, unknown policy).
    #[error("WB_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification of a [`WagerbookError`], telling the caller what
/// has to change before resubmitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Resubmit with the operator identity.
    Authorization,
    /// Correct the input.
    Validation,
    /// Wait for (or perform) a pause-state transition.
    State,
    /// Fix balance or allowance on the token ledger.
    Collaborator,
    /// Internal bookkeeping no longer matches custody.
    Invariant,
    /// Configuration could not be loaded.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::State => write!(f, "STATE"),
            Self::Collaborator => write!(f, "COLLABORATOR"),
            Self::Invariant => write!(f, "INVARIANT"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl WagerbookError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Authorization,
            Self::ZeroAddress
            | Self::SamePlayer(_)
            | Self::ZeroWager
            | Self::PotOverflow { .. }
            | Self::DuplicateBet
            | Self::NoOutstandingBet { .. }
            | Self::WinnerNotParticipant(_)
            | Self::InvalidAddress(_)
            | Self::ZeroWinner
            | Self::WinnerIsCustody(_)
            | Self::ZeroOperator => ErrorKind::Validation,
            Self::Paused | Self::AlreadyPaused => ErrorKind::State,
            Self::Token(_) => ErrorKind::Collaborator,
            Self::CustodyInvariantViolation { .. } => ErrorKind::Invariant,
            Self::Configuration(_) => ErrorKind::Internal,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, WagerbookError>;
