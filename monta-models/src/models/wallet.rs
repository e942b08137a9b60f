//! Personal wallet

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::models::{Balance, Currency, FromWire};
use crate::wire::{Fields, WireMap};

/// A wallet owned by a user or team
///
/// Every field has a default, so any mapping decodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub id: i64,
    pub owner_type: String,
    pub balance: Option<Balance>,
    pub currency: Option<Currency>,
    pub status: String,
}

impl FromWire for Wallet {
    const ENTITY: &'static str = "Wallet";

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Self {
            id: fields.i64_or("id", 0)?,
            owner_type: fields.str_or("ownerType", "")?,
            balance: Balance::from_object(fields.object("balance")?, config)?,
            currency: Currency::from_object(fields.object("currency")?, config)?,
            status: fields.str_or("status", "")?,
        })
    }
}
