//! Escrow policy configuration.
//!
//! Two behaviors are left open by the escrow's contract and are chosen per
//! deployment: whether settlement is gated by the circuit breaker, and
//! whether the declared winner must be one of the two players.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, WagerbookError};

/// Whether `pay_out_winner` is allowed while the escrow is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementPausePolicy {
    /// Pausing only halts new wagers.
    #[default]
    AllowWhilePaused,
    /// Pausing also halts payouts.
    BlockWhilePaused,
}

/// Which addresses may receive a pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerPolicy {
    /// Any non-zero address chosen by the operator.
    #[default]
    Unrestricted,
    /// Only one of the two players of the wager.
    MustBeParticipant,
}

/// Configuration for one escrow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EscrowConfig {
    pub settlement_pause_policy: SettlementPausePolicy,
    pub winner_policy: WinnerPolicy,
}

impl EscrowConfig {
    /// Strictest settings: payouts pause with the breaker and only players win.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            settlement_pause_policy: SettlementPausePolicy::BlockWhilePaused,
            winner_policy: WinnerPolicy::MustBeParticipant,
        }
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WagerbookError::Configuration(e.to_string()))
    }

    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            WagerbookError::Configuration(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let cfg = EscrowConfig::default();
        assert_eq!(
            cfg.settlement_pause_policy,
            SettlementPausePolicy::AllowWhilePaused
        );
        assert_eq!(cfg.winner_policy, WinnerPolicy::Unrestricted);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = EscrowConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EscrowConfig::default());
    }

    #[test]
    fn parses_snake_case_policies() {
        let cfg = EscrowConfig::from_json_str(
            r#"{"settlement_pause_policy":"block_while_paused","winner_policy":"must_be_participant"}"#,
        )
        .unwrap();
        assert_eq!(cfg, EscrowConfig::strict());
    }

    #[test]
    fn rejects_unknown_fields_and_values() {
        let err = EscrowConfig::from_json_str(r#"{"timeout":5}"#).unwrap_err();
        assert!(matches!(err, WagerbookError::Configuration(_)));
        let err = EscrowConfig::from_json_str(r#"{"winner_policy":"anyone"}"#).unwrap_err();
        assert!(matches!(err, WagerbookError::Configuration(_)));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let err = EscrowConfig::from_path("/nonexistent/wagerbook.json").unwrap_err();
        assert!(matches!(err, WagerbookError::Configuration(msg) if msg.contains("wagerbook.json")));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("wagerbook-cfg-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"winner_policy":"must_be_participant"}"#).unwrap();
        let cfg = EscrowConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.winner_policy, WinnerPolicy::MustBeParticipant);
        assert_eq!(
            cfg.settlement_pause_policy,
            SettlementPausePolicy::AllowWhilePaused
        );
    }
}
