//! Escrow engine — opens and settles two-party wagers.
//!
//! Every operation is staged so that nothing is committed until all
//! external transfers have succeeded:
//! 1. Check the caller is the operator
//! 2. Validate inputs and circuit-breaker state
//! 3. Reserve (or look up) the ledger slot for the pair
//! 4. Move funds on the token ledger
//! 5. Commit the ledger change, update the audit, emit the event
//!
//! A failure at any step returns before step 5, so the ledger and the
//! custody balance never disagree.

use std::sync::atomic::{AtomicU64, Ordering};

use wagerbook_token::FungibleToken;
use wagerbook_types::{
    Address, Amount, EscrowConfig, EscrowEvent, EscrowEventKind, PauseState, PlayerPair, Result,
    SettlementPausePolicy, TokenError, WagerbookError, WinnerPolicy, constants,
};

use crate::{
    access::AccessControl,
    custody::CustodyAudit,
    ledger::{BetLedger, Wager},
    pause_gate::PauseGate,
};

/// Process-wide deployment counter, mixed into each custody address.
static DEPLOY_NONCE: AtomicU64 = AtomicU64::new(0);

/// Custodial escrow for two-party wagers over a fungible token.
///
/// The engine owns its token handle; participants reach the token through
/// [`token_mut`](Self::token_mut) to approve the escrow's
/// [`custody`](Self::custody) account before a game starts.
pub struct EscrowEngine<T> {
    access: AccessControl,
    pause: PauseGate,
    ledger: BetLedger,
    audit: CustodyAudit,
    token: T,
    /// The escrow's own account on the token ledger.
    custody: Address,
    config: EscrowConfig,
    events: Vec<EscrowEvent>,
    next_sequence: u64,
}

impl<T: FungibleToken> EscrowEngine<T> {
    /// Deploy an escrow over `token` with default policies. `deployer`
    /// becomes the operator.
    ///
    /// # Errors
    /// Returns `ZeroOperator` if `deployer` is the null address.
    pub fn deploy(deployer: Address, token: T) -> Result<Self> {
        Self::with_config(deployer, token, EscrowConfig::default())
    }

    /// Deploy an escrow with explicit policies.
    ///
    /// # Errors
    /// Returns `ZeroOperator` if `deployer` is the null address.
    pub fn with_config(deployer: Address, token: T, config: EscrowConfig) -> Result<Self> {
        let access = AccessControl::new(deployer)?;
        let nonce = DEPLOY_NONCE.fetch_add(1, Ordering::Relaxed);
        let custody = Address::derive(
            constants::CUSTODY_DOMAIN,
            &[deployer.as_bytes(), &nonce.to_le_bytes()],
        );

        tracing::info!(
            operator = %deployer,
            custody = %custody,
            settlement_pause_policy = ?config.settlement_pause_policy,
            winner_policy = ?config.winner_policy,
            version = constants::VERSION,
            "Escrow deployed"
        );

        Ok(Self {
            access,
            pause: PauseGate::new(),
            ledger: BetLedger::new(),
            audit: CustodyAudit::new(),
            token,
            custody,
            config,
            events: Vec::new(),
            next_sequence: 0,
        })
    }

    // -----------------------------------------------------------------
    // Operator operations
    // -----------------------------------------------------------------

    /// Pull `wager` from each player into custody and record the pot.
    ///
    /// Both players must have approved [`custody`](Self::custody) for at
    /// least `wager`. Returns the pot (`2 × wager`) and emits `GameStarted`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `Unauthorized` if `caller` is not the operator
    /// - `ZeroAddress` / `SamePlayer` for invalid players
    /// - `Paused` while the circuit breaker is engaged
    /// - `ZeroWager` / `PotOverflow` for an unusable stake
    /// - `DuplicateBet` if the pair already has an outstanding wager
    /// - `Token` if either debit would be rejected by the token ledger
    pub fn start_game(
        &mut self,
        caller: Address,
        player_a: Address,
        player_b: Address,
        wager: Amount,
    ) -> Result<Amount> {
        self.try_start_game(caller, player_a, player_b, wager)
            .inspect_err(|err| {
                tracing::warn!(
                    caller = %caller,
                    player_a = %player_a,
                    player_b = %player_b,
                    wager,
                    error = %err,
                    "startGame rejected"
                );
            })
    }

    fn try_start_game(
        &mut self,
        caller: Address,
        player_a: Address,
        player_b: Address,
        wager: Amount,
    ) -> Result<Amount> {
        self.access.ensure_operator(caller)?;
        let pair = PlayerPair::new(player_a, player_b)?;
        self.pause.ensure_active()?;
        if wager == 0 {
            return Err(WagerbookError::ZeroWager);
        }
        let pot = wager
            .checked_mul(constants::PLAYERS_PER_WAGER)
            .ok_or(WagerbookError::PotOverflow { stake: wager })?;

        let custody = self.custody;
        let slot = self.ledger.reserve(pair)?;

        // Both debits are checked up front so a rejection normally
        // happens before any funds move.
        preflight_stake(&self.token, player_a, custody, wager)?;
        preflight_stake(&self.token, player_b, custody, wager)?;

        self.token.transfer_from(custody, player_a, custody, wager)?;
        if let Err(err) = self.token.transfer_from(custody, player_b, custody, wager) {
            // The first stake is returned; its consumed allowance is not.
            if let Err(refund_err) = self.token.transfer(custody, player_a, wager) {
                tracing::error!(
                    player = %player_a,
                    wager,
                    error = %refund_err,
                    "Failed to return first stake after second debit was rejected"
                );
                return Err(WagerbookError::CustodyInvariantViolation {
                    reason: format!(
                        "stake of {wager} from {player_a} stranded in custody \
                         (second debit: {err}; refund: {refund_err})"
                    ),
                });
            }
            tracing::error!(
                player_a = %player_a,
                player_b = %player_b,
                wager,
                error = %err,
                "Second stake rejected after pre-flight; first stake returned"
            );
            return Err(err.into());
        }

        slot.open(player_a, player_b, wager, pot);
        self.audit.record_pull(pot);

        tracing::info!(
            pair = %pair,
            player_a = %player_a,
            player_b = %player_b,
            pot,
            "Game started"
        );
        self.emit(EscrowEventKind::GameStarted {
            player_a,
            player_b,
            pot,
        });
        Ok(pot)
    }

    /// Pay the whole pot of `(player_a, player_b)` to `winner` and clear
    /// the pair's ledger entry. Returns the pot and emits `GameEnded`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the operator
    /// - `Paused` while paused, if the settlement policy blocks payouts
    /// - `ZeroWinner` if `winner` is the null address
    /// - `WinnerIsCustody` if `winner` is the escrow's own custody account
    /// - `NoOutstandingBet` if the pair has nothing in custody
    /// - `WinnerNotParticipant` if the winner policy requires a player
    /// - `Token` if the token ledger rejects the payout
    pub fn pay_out_winner(
        &mut self,
        caller: Address,
        player_a: Address,
        player_b: Address,
        winner: Address,
    ) -> Result<Amount> {
        self.try_pay_out_winner(caller, player_a, player_b, winner)
            .inspect_err(|err| {
                tracing::warn!(
                    caller = %caller,
                    player_a = %player_a,
                    player_b = %player_b,
                    winner = %winner,
                    error = %err,
                    "payOutWinner rejected"
                );
            })
    }

    fn try_pay_out_winner(
        &mut self,
        caller: Address,
        player_a: Address,
        player_b: Address,
        winner: Address,
    ) -> Result<Amount> {
        self.access.ensure_operator(caller)?;
        if self.config.settlement_pause_policy == SettlementPausePolicy::BlockWhilePaused {
            self.pause.ensure_active()?;
        }
        let custody = self.custody;
        if winner.is_zero() {
            return Err(WagerbookError::ZeroWinner);
        }
        // A self-transfer would close the wager without paying anyone.
        if winner == custody {
            return Err(WagerbookError::WinnerIsCustody(winner));
        }

        let bet = self.ledger.outstanding(player_a, player_b)?;
        if self.config.winner_policy == WinnerPolicy::MustBeParticipant
            && !bet.wager().pair.contains(winner)
        {
            return Err(WagerbookError::WinnerNotParticipant(winner));
        }

        let pot = bet.wager().pot;
        self.token.transfer(custody, winner, pot)?;
        let closed = bet.close();
        self.audit.record_payout(pot);

        tracing::info!(
            pair = %closed.pair,
            winner = %winner,
            pot,
            opened_at = %closed.opened_at,
            "Game ended"
        );
        self.emit(EscrowEventKind::GameEnded {
            player_a,
            player_b,
            winner,
            pot,
        });
        Ok(pot)
    }

    /// Engage the circuit breaker.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the operator
    /// - `AlreadyPaused` if already paused
    pub fn pause(&mut self, caller: Address) -> Result<()> {
        self.access
            .ensure_operator(caller)
            .and_then(|()| self.pause.pause())
            .inspect_err(|err| tracing::warn!(caller = %caller, error = %err, "pause rejected"))?;

        tracing::info!(operator = %caller, "Escrow paused");
        self.emit(EscrowEventKind::Paused { operator: caller });
        Ok(())
    }

    /// Release the circuit breaker. Unpausing an active escrow succeeds
    /// without emitting anything.
    ///
    /// # Errors
    /// Returns `Unauthorized` if `caller` is not the operator.
    pub fn unpause(&mut self, caller: Address) -> Result<()> {
        self.access
            .ensure_operator(caller)
            .inspect_err(|err| tracing::warn!(caller = %caller, error = %err, "unpause rejected"))?;

        if self.pause.unpause() {
            tracing::info!(operator = %caller, "Escrow unpaused");
            self.emit(EscrowEventKind::Unpaused { operator: caller });
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Queries (callable by anyone)
    // -----------------------------------------------------------------

    /// Outstanding pot between two players, or 0. Symmetric.
    #[must_use]
    pub fn bets(&self, player_a: Address, player_b: Address) -> Amount {
        self.ledger.bets(player_a, player_b)
    }

    /// Full record of the outstanding wager between two players.
    #[must_use]
    pub fn wager(&self, player_a: Address, player_b: Address) -> Option<&Wager> {
        PlayerPair::new(player_a, player_b)
            .ok()
            .and_then(|pair| self.ledger.get(&pair))
    }

    /// All outstanding wagers in canonical pair order.
    pub fn outstanding(&self) -> impl Iterator<Item = &Wager> {
        self.ledger.iter()
    }

    #[must_use]
    pub fn outstanding_count(&self) -> usize {
        self.ledger.len()
    }

    /// Sum of all outstanding pots.
    #[must_use]
    pub fn total_in_custody(&self) -> Amount {
        self.ledger.total_pot()
    }

    #[must_use]
    pub fn operator(&self) -> Address {
        self.access.operator()
    }

    /// The escrow's own account on the token ledger. Players approve this
    /// address as spender.
    #[must_use]
    pub fn custody(&self) -> Address {
        self.custody
    }

    #[must_use]
    pub fn pause_state(&self) -> PauseState {
        self.pause.state()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[must_use]
    pub fn config(&self) -> &EscrowConfig {
        &self.config
    }

    #[must_use]
    pub fn audit(&self) -> &CustodyAudit {
        &self.audit
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EscrowEvent] {
        &self.events
    }

    /// Take all buffered events. Sequence numbers keep increasing.
    pub fn drain_events(&mut self) -> Vec<EscrowEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    /// Check the custody invariants against the live token balance.
    ///
    /// # Errors
    /// Returns `CustodyInvariantViolation` if the outstanding pots are not
    /// fully backed by the custody account.
    pub fn verify_custody(&self) -> Result<()> {
        self.audit.verify(
            self.ledger.total_pot(),
            self.token.balance_of(self.custody),
        )
    }

    fn emit(&mut self, kind: EscrowEventKind) {
        let event = EscrowEvent::new(self.next_sequence, self.custody, kind);
        self.next_sequence += 1;
        tracing::debug!(sequence = event.sequence, kind = %event.kind, "Event emitted");
        self.events.push(event);
    }
}

/// Check that `player` has approved and holds at least `stake`.
fn preflight_stake<T: FungibleToken>(
    token: &T,
    player: Address,
    custody: Address,
    stake: Amount,
) -> Result<()> {
    let allowed = token.allowance(player, custody);
    if allowed < stake {
        return Err(TokenError::InsufficientAllowance {
            needed: stake,
            available: allowed,
        }
        .into());
    }
    let balance = token.balance_of(player);
    if balance < stake {
        return Err(TokenError::InsufficientBalance {
            needed: stake,
            available: balance,
        }
        .into());
    }
    tracing::debug!(player = %player, stake, allowed, balance, "Stake pre-flight passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use wagerbook_token::InMemoryToken;

    use super::*;

    struct Fixture {
        escrow: EscrowEngine<InMemoryToken>,
        owner: Address,
        p1: Address,
        p2: Address,
    }

    fn setup_with(config: EscrowConfig) -> Fixture {
        let owner = Address::labeled("owner");
        let p1 = Address::labeled("player1");
        let p2 = Address::labeled("player2");
        let mut token = InMemoryToken::with_supply(owner, 1_000_000).unwrap();
        token.transfer(owner, p1, 10_000).unwrap();
        token.transfer(owner, p2, 10_000).unwrap();

        let mut escrow = EscrowEngine::with_config(owner, token, config).unwrap();
        let custody = escrow.custody();
        let supply = escrow.token().total_supply();
        escrow.token_mut().approve(p1, custody, supply).unwrap();
        escrow.token_mut().approve(p2, custody, supply).unwrap();
        Fixture {
            escrow,
            owner,
            p1,
            p2,
        }
    }

    fn setup() -> Fixture {
        setup_with(EscrowConfig::default())
    }

    #[test]
    fn deploy_sets_operator_and_custody() {
        let f = setup();
        assert_eq!(f.escrow.operator(), f.owner);
        assert!(!f.escrow.custody().is_zero());
        assert_ne!(f.escrow.custody(), f.owner);
        assert_eq!(f.escrow.pause_state(), PauseState::Active);
        assert!(f.escrow.events().is_empty());
    }

    #[test]
    fn each_deployment_gets_its_own_custody() {
        let owner = Address::labeled("owner");
        let a = EscrowEngine::deploy(owner, InMemoryToken::new()).unwrap();
        let b = EscrowEngine::deploy(owner, InMemoryToken::new()).unwrap();
        assert_ne!(a.custody(), b.custody());
    }

    #[test]
    fn zero_deployer_rejected() {
        assert!(matches!(
            EscrowEngine::deploy(Address::ZERO, InMemoryToken::new()),
            Err(WagerbookError::ZeroOperator)
        ));
    }

    #[test]
    fn start_game_pulls_both_stakes() {
        let mut f = setup();
        let pot = f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        assert_eq!(pot, 200);
        assert_eq!(f.escrow.bets(f.p1, f.p2), 200);
        assert_eq!(f.escrow.bets(f.p2, f.p1), 200);
        assert_eq!(f.escrow.token().balance_of(f.p1), 9_900);
        assert_eq!(f.escrow.token().balance_of(f.p2), 9_900);
        assert_eq!(f.escrow.token().balance_of(f.escrow.custody()), 200);
        assert!(f.escrow.verify_custody().is_ok());

        let wager = f.escrow.wager(f.p2, f.p1).unwrap();
        assert_eq!(wager.stake, 100);
        assert_eq!(wager.player_a, f.p1);
    }

    #[test]
    fn start_game_emits_game_started() {
        let mut f = setup();
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        let events = f.escrow.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sequence, 0);
        assert_eq!(events[0].emitter, f.escrow.custody());
        assert_eq!(
            events[0].kind,
            EscrowEventKind::GameStarted {
                player_a: f.p1,
                player_b: f.p2,
                pot: 200
            }
        );
    }

    #[test]
    fn zero_wager_rejected() {
        let mut f = setup();
        let err = f.escrow.start_game(f.owner, f.p1, f.p2, 0).unwrap_err();
        assert!(matches!(err, WagerbookError::ZeroWager));
        assert_eq!(f.escrow.outstanding_count(), 0);
    }

    #[test]
    fn pot_overflow_rejected() {
        let mut f = setup();
        let err = f
            .escrow
            .start_game(f.owner, f.p1, f.p2, Amount::MAX / 2 + 1)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::PotOverflow { .. }));
    }

    #[test]
    fn same_player_rejected() {
        let mut f = setup();
        let err = f.escrow.start_game(f.owner, f.p1, f.p1, 10).unwrap_err();
        assert!(matches!(err, WagerbookError::SamePlayer(p) if p == f.p1));
        assert_eq!(f.escrow.token().balance_of(f.p1), 10_000);
    }

    #[test]
    fn missing_allowance_moves_nothing() {
        let mut f = setup();
        let custody = f.escrow.custody();
        f.escrow.token_mut().approve(f.p2, custody, 50).unwrap();

        let err = f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap_err();
        assert!(matches!(
            err,
            WagerbookError::Token(TokenError::InsufficientAllowance {
                needed: 100,
                available: 50
            })
        ));
        assert_eq!(f.escrow.token().balance_of(f.p1), 10_000);
        assert_eq!(f.escrow.token().allowance(f.p1, custody), 1_000_000);
        assert_eq!(f.escrow.bets(f.p1, f.p2), 0);
        assert!(f.escrow.events().is_empty());
    }

    #[test]
    fn insufficient_balance_moves_nothing() {
        let mut f = setup();
        let err = f.escrow.start_game(f.owner, f.p1, f.p2, 10_001).unwrap_err();
        assert!(matches!(
            err,
            WagerbookError::Token(TokenError::InsufficientBalance { .. })
        ));
        assert_eq!(f.escrow.token().balance_of(f.p1), 10_000);
        assert_eq!(f.escrow.token().balance_of(f.p2), 10_000);
        assert_eq!(f.escrow.outstanding_count(), 0);
    }

    #[test]
    fn payout_to_third_party_allowed_by_default() {
        let mut f = setup();
        let charity = Address::labeled("charity");
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        f.escrow.pay_out_winner(f.owner, f.p1, f.p2, charity).unwrap();
        assert_eq!(f.escrow.token().balance_of(charity), 200);
    }

    #[test]
    fn participant_policy_rejects_third_party() {
        let mut f = setup_with(EscrowConfig {
            winner_policy: WinnerPolicy::MustBeParticipant,
            ..EscrowConfig::default()
        });
        let charity = Address::labeled("charity");
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        let err = f
            .escrow
            .pay_out_winner(f.owner, f.p1, f.p2, charity)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::WinnerNotParticipant(w) if w == charity));
        assert_eq!(f.escrow.bets(f.p1, f.p2), 200);

        f.escrow.pay_out_winner(f.owner, f.p1, f.p2, f.p2).unwrap();
        assert_eq!(f.escrow.token().balance_of(f.p2), 10_100);
    }

    #[test]
    fn payout_to_zero_rejected() {
        let mut f = setup();
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        let err = f
            .escrow
            .pay_out_winner(f.owner, f.p1, f.p2, Address::ZERO)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::ZeroWinner));
        assert!(err.to_string().contains("Winner can't be the 0 address"));
        assert_eq!(f.escrow.bets(f.p1, f.p2), 200);
    }

    #[test]
    fn payout_to_custody_rejected() {
        let mut f = setup();
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        let custody = f.escrow.custody();
        let err = f
            .escrow
            .pay_out_winner(f.owner, f.p1, f.p2, custody)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::WinnerIsCustody(w) if w == custody));
        assert_eq!(f.escrow.bets(f.p1, f.p2), 200);
        assert_eq!(f.escrow.audit().total_paid_out(), 0);
        assert_eq!(f.escrow.events().len(), 1);
        f.escrow.verify_custody().unwrap();

        f.escrow.pay_out_winner(f.owner, f.p1, f.p2, f.p2).unwrap();
        assert_eq!(f.escrow.token().balance_of(custody), 0);
    }

    #[test]
    fn payout_without_bet_rejected() {
        let mut f = setup();
        let err = f
            .escrow
            .pay_out_winner(f.owner, f.p1, f.p2, f.p1)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::NoOutstandingBet { .. }));
        assert_eq!(err.kind(), wagerbook_types::ErrorKind::Validation);
    }

    #[test]
    fn settlement_allowed_while_paused_by_default() {
        let mut f = setup();
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        f.escrow.pause(f.owner).unwrap();
        f.escrow.pay_out_winner(f.owner, f.p1, f.p2, f.p1).unwrap();
        assert_eq!(f.escrow.bets(f.p1, f.p2), 0);
    }

    #[test]
    fn blocking_policy_halts_settlement_while_paused() {
        let mut f = setup_with(EscrowConfig {
            settlement_pause_policy: SettlementPausePolicy::BlockWhilePaused,
            ..EscrowConfig::default()
        });
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        f.escrow.pause(f.owner).unwrap();
        let err = f
            .escrow
            .pay_out_winner(f.owner, f.p1, f.p2, f.p1)
            .unwrap_err();
        assert!(matches!(err, WagerbookError::Paused));
        assert_eq!(f.escrow.bets(f.p1, f.p2), 200);

        f.escrow.unpause(f.owner).unwrap();
        f.escrow.pay_out_winner(f.owner, f.p1, f.p2, f.p1).unwrap();
    }

    #[test]
    fn pause_and_unpause_emit_events() {
        let mut f = setup();
        f.escrow.pause(f.owner).unwrap();
        f.escrow.unpause(f.owner).unwrap();
        f.escrow.unpause(f.owner).unwrap();
        let kinds: Vec<String> = f.escrow.events().iter().map(|e| e.kind.to_string()).collect();
        assert_eq!(kinds, ["PAUSED", "UNPAUSED"]);
    }

    #[test]
    fn drain_events_keeps_sequence() {
        let mut f = setup();
        f.escrow.pause(f.owner).unwrap();
        let drained = f.escrow.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(f.escrow.events().is_empty());
        f.escrow.unpause(f.owner).unwrap();
        assert_eq!(f.escrow.events()[0].sequence, 1);
    }

    #[test]
    fn custody_theft_detected() {
        let mut f = setup();
        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        let custody = f.escrow.custody();
        let thief = Address::labeled("thief");
        f.escrow.token_mut().transfer(custody, thief, 1).unwrap();
        assert!(matches!(
            f.escrow.verify_custody(),
            Err(WagerbookError::CustodyInvariantViolation { .. })
        ));
    }

    #[test]
    fn total_in_custody_tracks_pairs() {
        let mut f = setup();
        let p3 = Address::labeled("player3");
        let custody = f.escrow.custody();
        f.escrow.token_mut().transfer(f.owner, p3, 1_000).unwrap();
        f.escrow.token_mut().approve(p3, custody, 1_000).unwrap();

        f.escrow.start_game(f.owner, f.p1, f.p2, 100).unwrap();
        f.escrow.start_game(f.owner, f.p1, p3, 50).unwrap();
        assert_eq!(f.escrow.outstanding_count(), 2);
        assert_eq!(f.escrow.total_in_custody(), 300);
        assert_eq!(f.escrow.outstanding().count(), 2);
        assert!(f.escrow.verify_custody().is_ok());
        assert_eq!(f.escrow.audit().total_pulled_in(), 300);
    }
}
