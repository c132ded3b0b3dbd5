//! # wagerbook-escrow
//!
//! Custodial escrow for two-party wagers over a fungible token.
//!
//! ## Architecture
//!
//! 1. **AccessControl**: a single operator, fixed at deployment
//! 2. **PauseGate**: ACTIVE / PAUSED circuit breaker gating new wagers
//! 3. **BetLedger**: one outstanding wager per unordered pair of players
//! 4. **CustodyAudit**: conservation check between ledger and custody
//! 5. **EscrowEngine**: orchestrates the above and the token collaborator
//!
//! ## Wager Flow
//!
//! ```text
//! player.approve(custody) → operator.start_game() → transfer_from × 2 → ledger
//!     → operator.pay_out_winner() → transfer(winner, pot) → ledger cleared
//! ```
//!
//! Every operation either commits all of its effects or none of them.

pub mod access;
pub mod custody;
pub mod engine;
pub mod ledger;
pub mod pause_gate;

pub use access::AccessControl;
pub use custody::CustodyAudit;
pub use engine::EscrowEngine;
pub use ledger::{BetLedger, Wager};
pub use pause_gate::PauseGate;
