//! Bet ledger — at most one outstanding wager per unordered pair.
//!
//! Entries are keyed by the canonical [`PlayerPair`], so there is exactly
//! one record per pair and lookups with either argument order agree.
//!
//! Mutation goes through two-phase handles so the engine can validate,
//! move funds, and only then commit:
//! - [`BetLedger::reserve`] → [`VacantBet::open`]
//! - [`BetLedger::outstanding`] → [`OutstandingBet::close`]

use std::collections::{
    BTreeMap,
    btree_map::{Entry, OccupiedEntry, VacantEntry},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wagerbook_types::{Address, Amount, PlayerPair, Result, WagerbookError};

/// One outstanding wager held in custody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    /// Canonical key of the two players.
    pub pair: PlayerPair,
    /// Players in the order the operator supplied them.
    pub player_a: Address,
    pub player_b: Address,
    /// Amount pulled from each player.
    pub stake: Amount,
    /// Total custodied for this wager (both stakes).
    pub pot: Amount,
    pub opened_at: DateTime<Utc>,
}

/// All outstanding wagers, one per unordered pair.
#[derive(Debug, Default)]
pub struct BetLedger {
    wagers: BTreeMap<PlayerPair, Wager>,
}

impl BetLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding pot between two players, or 0.
    ///
    /// Symmetric in its arguments. Zero or identical addresses never have
    /// a wager and read as 0.
    #[must_use]
    pub fn bets(&self, a: Address, b: Address) -> Amount {
        PlayerPair::new(a, b)
            .ok()
            .and_then(|pair| self.wagers.get(&pair))
            .map_or(0, |w| w.pot)
    }

    #[must_use]
    pub fn get(&self, pair: &PlayerPair) -> Option<&Wager> {
        self.wagers.get(pair)
    }

    /// Claim the slot for a new wager on `pair`.
    ///
    /// Nothing is recorded until [`VacantBet::open`] is called; dropping the
    /// handle leaves the ledger unchanged.
    ///
    /// # Errors
    /// Returns [`WagerbookError::DuplicateBet`] if the pair already has an
    /// outstanding wager.
    pub fn reserve(&mut self, pair: PlayerPair) -> Result<VacantBet<'_>> {
        match self.wagers.entry(pair) {
            Entry::Vacant(entry) => Ok(VacantBet { entry }),
            Entry::Occupied(_) => Err(WagerbookError::DuplicateBet),
        }
    }

    /// Look up the outstanding wager for `(a, b)` in preparation for closing it.
    ///
    /// # Errors
    /// Returns [`WagerbookError::NoOutstandingBet`] if there is none.
    pub fn outstanding(&mut self, a: Address, b: Address) -> Result<OutstandingBet<'_>> {
        let none = || WagerbookError::NoOutstandingBet { a, b };
        let pair = PlayerPair::new(a, b).map_err(|_| none())?;
        match self.wagers.entry(pair) {
            Entry::Occupied(entry) => Ok(OutstandingBet { entry }),
            Entry::Vacant(_) => Err(none()),
        }
    }

    /// Number of outstanding wagers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wagers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wagers.is_empty()
    }

    /// Sum of all outstanding pots.
    #[must_use]
    pub fn total_pot(&self) -> Amount {
        self.wagers
            .values()
            .fold(0, |acc: Amount, w| acc.saturating_add(w.pot))
    }

    /// Outstanding wagers in canonical pair order.
    pub fn iter(&self) -> impl Iterator<Item = &Wager> {
        self.wagers.values()
    }
}

/// A reserved, still-empty ledger slot.
pub struct VacantBet<'a> {
    entry: VacantEntry<'a, PlayerPair, Wager>,
}

impl<'a> VacantBet<'a> {
    #[must_use]
    pub fn pair(&self) -> PlayerPair {
        *self.entry.key()
    }

    /// Record the wager. The stakes must already be in custody.
    pub fn open(self, player_a: Address, player_b: Address, stake: Amount, pot: Amount) -> &'a Wager {
        let pair = *self.entry.key();
        self.entry.insert(Wager {
            pair,
            player_a,
            player_b,
            stake,
            pot,
            opened_at: Utc::now(),
        })
    }
}

/// An outstanding wager about to be settled.
pub struct OutstandingBet<'a> {
    entry: OccupiedEntry<'a, PlayerPair, Wager>,
}

impl OutstandingBet<'_> {
    #[must_use]
    pub fn wager(&self) -> &Wager {
        self.entry.get()
    }

    /// Remove the wager. The pot must already have left custody.
    pub fn close(self) -> Wager {
        self.entry.remove()
    }
}
