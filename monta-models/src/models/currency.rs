//! Currency value object

use serde_json::Value;

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::wire::{Fields, WireMap};

/// Fraction digits used when the payload does not say
pub const DEFAULT_DECIMALS: u32 = 2;

/// Currency attached to wallets and transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO code, e.g. `DKK`
    pub identifier: String,
    pub name: String,
    /// Number of fractional digits for amounts in this currency
    pub decimals: u32,
}

impl Currency {
    pub const ENTITY: &'static str = "Currency";

    /// Decode an embedded currency; `None` and `{}` both yield `None`
    pub fn from_object(
        data: Option<&WireMap>,
        config: &DecodeConfig,
    ) -> Result<Option<Self>, DecodeError> {
        let Some(map) = data.filter(|m| !m.is_empty()) else {
            return Ok(None);
        };
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Some(Self {
            identifier: fields.str_or("identifier", "")?,
            name: fields.str_or("name", "")?,
            decimals: fields.u32_or("decimals", DEFAULT_DECIMALS)?,
        }))
    }

    /// The three scalar fields, as embedded in outbound payloads
    pub fn to_map(&self) -> WireMap {
        let mut map = WireMap::new();
        map.insert("identifier".into(), Value::from(self.identifier.as_str()));
        map.insert("name".into(), Value::from(self.name.as_str()));
        map.insert("decimals".into(), Value::from(self.decimals));
        map
    }
}
