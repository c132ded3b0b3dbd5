//! # wagerbook-types
//!
//! Shared types, errors, and configuration for the **Wagerbook** escrow.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`Address`], [`PlayerPair`], [`Amount`]
//! - **Circuit breaker**: [`PauseState`]
//! - **Events**: [`EscrowEvent`], [`EscrowEventKind`]
//! - **Configuration**: [`EscrowConfig`], [`SettlementPausePolicy`], [`WinnerPolicy`]
//! - **Errors**: [`WagerbookError`] with `WB_ERR_` prefix codes, [`TokenError`]
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod pause;

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use pause::*;

// Constants are accessed via `wagerbook_types::constants::FOO`
// (not re-exported to avoid name collisions).
