//! # wagerbook-token
//!
//! The fungible-token collaborator boundary of the escrow.
//!
//! - [`FungibleToken`]: the interface the escrow depends on (balances,
//!   allowances, `transfer`, `transfer_from`, `approve`, supply)
//! - [`InMemoryToken`]: a reference ledger with standard fungible-token
//!   semantics, used to exercise the escrow
//!
//! The escrow only ever calls `transfer_from` (pull stakes) and `transfer`
//! (push the pot). Participants call `approve` themselves.

pub mod in_memory;
pub mod token;

pub use in_memory::InMemoryToken;
pub use token::FungibleToken;
