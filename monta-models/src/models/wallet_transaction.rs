//! Wallet transaction
//!
//! A transfer of value between two wallets, or between a wallet and an
//! external settlement, optionally attributed to a charge.

use chrono::{DateTime, Utc};

use crate::config::{DecodeConfig, EncodeConfig};
use crate::error::DecodeError;
use crate::models::{Currency, FromWire, ToWire};
use crate::wire::{Fields, WireMap, WireWriter};

/// Wire keys
mod keys {
    pub const ID: &str = "id";
    pub const STATE: &str = "state";
    pub const SUMMARY: &str = "summary";
    pub const NOTE: &str = "note";
    pub const FROM_AMOUNT: &str = "fromAmount";
    pub const FROM_CURRENCY: &str = "fromCurrency";
    pub const FROM_WALLET_ID: &str = "fromWalletId";
    pub const TO_AMOUNT: &str = "toAmount";
    pub const TO_CURRENCY: &str = "toCurrency";
    pub const TO_WALLET_ID: &str = "toWalletId";
    pub const CHARGE_ID: &str = "chargeId";
    pub const EXCHANGE_RATE: &str = "exchangeRate";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const COMPLETED_AT: &str = "completedAt";
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub id: i64,
    /// One of [`WalletTransactionState`](crate::WalletTransactionState) in practice
    pub state: String,
    pub summary: String,
    pub note: Option<String>,
    pub from_amount: f64,
    pub from_currency: Option<Currency>,
    /// Referenced wallet, not embedded
    pub from_wallet_id: Option<i64>,
    pub to_amount: f64,
    pub to_currency: Option<Currency>,
    pub to_wallet_id: Option<i64>,
    pub charge_id: Option<i64>,
    pub exchange_rate: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for WalletTransaction {
    fn default() -> Self {
        Self {
            id: 0,
            state: String::new(),
            summary: String::new(),
            note: None,
            from_amount: 0.0,
            from_currency: None,
            from_wallet_id: None,
            to_amount: 0.0,
            to_currency: None,
            to_wallet_id: None,
            charge_id: None,
            exchange_rate: 1.0,
            created_at: None,
            updated_at: None,
            completed_at: None,
        }
    }
}

impl FromWire for WalletTransaction {
    const ENTITY: &'static str = "WalletTransaction";

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Self {
            id: fields.required_i64(keys::ID)?,
            state: fields.str_or(keys::STATE, "")?,
            summary: fields.str_or(keys::SUMMARY, "")?,
            note: fields.str_opt(keys::NOTE)?,
            from_amount: fields.f64_or(keys::FROM_AMOUNT, 0.0)?,
            from_currency: Currency::from_object(fields.object(keys::FROM_CURRENCY)?, config)?,
            from_wallet_id: fields.i64_opt(keys::FROM_WALLET_ID)?,
            to_amount: fields.f64_or(keys::TO_AMOUNT, 0.0)?,
            to_currency: Currency::from_object(fields.object(keys::TO_CURRENCY)?, config)?,
            to_wallet_id: fields.i64_opt(keys::TO_WALLET_ID)?,
            charge_id: fields.i64_opt(keys::CHARGE_ID)?,
            exchange_rate: fields.f64_or(keys::EXCHANGE_RATE, 1.0)?,
            created_at: fields.instant(keys::CREATED_AT),
            updated_at: fields.instant(keys::UPDATED_AT),
            completed_at: fields.instant(keys::COMPLETED_AT),
        })
    }
}

impl ToWire for WalletTransaction {
    fn to_map_with(&self, config: &EncodeConfig) -> WireMap {
        WireWriter::new(config)
            .put(keys::ID, self.id)
            .put(keys::STATE, self.state.as_str())
            .put(keys::SUMMARY, self.summary.as_str())
            .put_opt(keys::NOTE, self.note.as_deref())
            .put(keys::FROM_AMOUNT, self.from_amount)
            .put_opt(keys::FROM_CURRENCY, self.from_currency.as_ref().map(Currency::to_map))
            .put_opt(keys::FROM_WALLET_ID, self.from_wallet_id)
            .put(keys::TO_AMOUNT, self.to_amount)
            .put_opt(keys::TO_CURRENCY, self.to_currency.as_ref().map(Currency::to_map))
            .put_opt(keys::TO_WALLET_ID, self.to_wallet_id)
            .put_opt(keys::CHARGE_ID, self.charge_id)
            .put(keys::EXCHANGE_RATE, self.exchange_rate)
            .put_instant(keys::CREATED_AT, self.created_at.as_ref())
            .put_instant(keys::UPDATED_AT, self.updated_at.as_ref())
            .put_instant(keys::COMPLETED_AT, self.completed_at.as_ref())
            .finish()
    }
}
