//! Account identifiers and the canonical player-pair key.
//!
//! Addresses are 20-byte account identifiers on the token ledger. The
//! all-zero address is the null address and is never a valid participant.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::{Result, WagerbookError};

/// Token amount in base units.
pub type Amount = u128;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 20-byte account identifier on the token ledger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The null address.
    pub const ZERO: Self = Self([0u8; 20]);

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Deterministic address from a domain tag and arbitrary parts.
    ///
    /// Same inputs always produce the same address, so every observer can
    /// recompute e.g. an escrow's custody account from its deployment data.
    #[must_use]
    pub fn derive(domain: &[u8], parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"wagerbook:address:v1:");
        hasher.update(domain);
        for part in parts {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part);
        }
        let hash = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[..20]);
        Self(bytes)
    }

    /// First four bytes in hex, for compact log fields.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = WagerbookError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits)
            .map_err(|e| WagerbookError::InvalidAddress(format!("{s}: {e}")))?;
        let bytes: [u8; 20] = raw.try_into().map_err(|raw: Vec<u8>| {
            WagerbookError::InvalidAddress(format!("{s}: expected 20 bytes, got {}", raw.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Deterministic test addresses. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl Address {
    /// Address derived from a human-readable label ("owner", "player1", ...).
    #[must_use]
    pub fn labeled(label: &str) -> Self {
        Self::derive(b"label", &[label.as_bytes()])
    }

    /// A random non-zero address.
    #[must_use]
    pub fn random() -> Self {
        loop {
            let addr = Self(rand::random::<[u8; 20]>());
            if !addr.is_zero() {
                return addr;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerPair
// ---------------------------------------------------------------------------

/// Unordered pair of two distinct, non-zero participants.
///
/// Stored in canonical order (`low < high`) so `(a, b)` and `(b, a)` are the
/// same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerPair {
    low: Address,
    high: Address,
}

impl PlayerPair {
    /// Build the canonical key for two players.
    ///
    /// # Errors
    /// - `ZeroAddress` if either player is the null address
    /// - `SamePlayer` if both arguments name the same account
    pub fn new(a: Address, b: Address) -> Result<Self> {
        if a.is_zero() || b.is_zero() {
            return Err(WagerbookError::ZeroAddress);
        }
        if a == b {
            return Err(WagerbookError::SamePlayer(a));
        }
        Ok(if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        })
    }

    #[must_use]
    pub fn low(&self) -> Address {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> Address {
        self.high
    }

    #[must_use]
    pub fn contains(&self, addr: Address) -> bool {
        self.low == addr || self.high == addr
    }
}

impl fmt::Display for PlayerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<>{}", self.low.short(), self.high.short())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
