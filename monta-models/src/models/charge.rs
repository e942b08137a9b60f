//! Charging session
//!
//! A charge moves through its lifecycle by filling in timestamps, roughly
//! created -> started -> cable plugged in -> stopped / fully charged /
//! failed / timed out. No ordering between them is enforced.

use chrono::{DateTime, Utc};

use crate::config::{DecodeConfig, EncodeConfig};
use crate::error::DecodeError;
use crate::models::{FromWire, ToWire};
use crate::wire::{Fields, WireMap, WireWriter};

/// Wire keys
mod keys {
    pub const ID: &str = "id";
    pub const STATE: &str = "state";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const STARTED_AT: &str = "startedAt";
    pub const STOPPED_AT: &str = "stoppedAt";
    pub const CABLE_PLUGGED_IN_AT: &str = "cablePluggedInAt";
    pub const FULLY_CHARGED_AT: &str = "fullyChargedAt";
    pub const FAILED_AT: &str = "failedAt";
    pub const TIMEOUT_AT: &str = "timeoutAt";
}

/// A charging session on a charge point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charge {
    pub id: i64,
    /// One of [`ChargeState`](crate::ChargeState) in practice; not validated
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub stopped_at: Option<DateTime<Utc>>,
    pub cable_plugged_in_at: Option<DateTime<Utc>>,
    pub fully_charged_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub timeout_at: Option<DateTime<Utc>>,
}

impl FromWire for Charge {
    const ENTITY: &'static str = "Charge";

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Self {
            id: fields.required_i64(keys::ID)?,
            state: fields.str_or(keys::STATE, "")?,
            created_at: fields.instant(keys::CREATED_AT),
            updated_at: fields.instant(keys::UPDATED_AT),
            started_at: fields.instant(keys::STARTED_AT),
            stopped_at: fields.instant(keys::STOPPED_AT),
            cable_plugged_in_at: fields.instant(keys::CABLE_PLUGGED_IN_AT),
            fully_charged_at: fields.instant(keys::FULLY_CHARGED_AT),
            failed_at: fields.instant(keys::FAILED_AT),
            timeout_at: fields.instant(keys::TIMEOUT_AT),
        })
    }
}

impl ToWire for Charge {
    fn to_map_with(&self, config: &EncodeConfig) -> WireMap {
        WireWriter::new(config)
            .put(keys::ID, self.id)
            .put(keys::STATE, self.state.as_str())
            .put_instant(keys::CREATED_AT, self.created_at.as_ref())
            .put_instant(keys::UPDATED_AT, self.updated_at.as_ref())
            .put_instant(keys::STARTED_AT, self.started_at.as_ref())
            .put_instant(keys::STOPPED_AT, self.stopped_at.as_ref())
            .put_instant(keys::CABLE_PLUGGED_IN_AT, self.cable_plugged_in_at.as_ref())
            .put_instant(keys::FULLY_CHARGED_AT, self.fully_charged_at.as_ref())
            .put_instant(keys::FAILED_AT, self.failed_at.as_ref())
            .put_instant(keys::TIMEOUT_AT, self.timeout_at.as_ref())
            .finish()
    }
}
