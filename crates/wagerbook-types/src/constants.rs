//! System-wide constants for the Wagerbook escrow.

/// Number of participants in every wager.
pub const PLAYERS_PER_WAGER: u128 = 2;

/// Domain tag for deriving an escrow's custody account.
pub const CUSTODY_DOMAIN: &[u8] = b"custody";

/// Decimal places of the reference token (18, ERC-20 convention).
pub const TOKEN_DECIMALS: u32 = 18;

/// One whole token in base units.
pub const ONE_TOKEN: u128 = 10u128.pow(TOKEN_DECIMALS);

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
