//! State vocabularies for filter parameters
//!
//! Decoders keep `state` fields as plain text; these enums are only used by
//! callers that build or validate filter values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A state string outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} state: {value}")]
pub struct UnknownState {
    pub kind: &'static str,
    pub value: String,
}

/// Charge session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeState {
    Reserved,
    Starting,
    Charging,
    Stopping,
    Paused,
    Scheduled,
    Stopped,
    Completed,
}

impl ChargeState {
    pub const ALL: [ChargeState; 8] = [
        ChargeState::Reserved,
        ChargeState::Starting,
        ChargeState::Charging,
        ChargeState::Stopping,
        ChargeState::Paused,
        ChargeState::Scheduled,
        ChargeState::Stopped,
        ChargeState::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChargeState::Reserved => "reserved",
            ChargeState::Starting => "starting",
            ChargeState::Charging => "charging",
            ChargeState::Stopping => "stopping",
            ChargeState::Paused => "paused",
            ChargeState::Scheduled => "scheduled",
            ChargeState::Stopped => "stopped",
            ChargeState::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ChargeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChargeState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChargeState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownState {
                kind: "charge",
                value: s.to_string(),
            })
    }
}

/// Wallet transaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletTransactionState {
    Complete,
    Pending,
    Failed,
    Reserved,
}

impl WalletTransactionState {
    pub const ALL: [WalletTransactionState; 4] = [
        WalletTransactionState::Complete,
        WalletTransactionState::Pending,
        WalletTransactionState::Failed,
        WalletTransactionState::Reserved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WalletTransactionState::Complete => "complete",
            WalletTransactionState::Pending => "pending",
            WalletTransactionState::Failed => "failed",
            WalletTransactionState::Reserved => "reserved",
        }
    }
}

impl std::fmt::Display for WalletTransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WalletTransactionState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletTransactionState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownState {
                kind: "wallet transaction",
                value: s.to_string(),
            })
    }
}
