//! Typed Monta API resources
//!
//! - `currency`, `balance`: value objects embedded in other resources
//! - `wallet`, `charge`, `charge_point`, `wallet_transaction`, `token`:
//!   top-level resources decoded through [`FromWire`]
//!
//! Charge and WalletTransaction also implement [`ToWire`] for outbound use.

pub mod balance;
pub mod charge;
pub mod charge_point;
pub mod currency;
pub mod token;
pub mod wallet;
pub mod wallet_transaction;

pub use balance::Balance;
pub use charge::Charge;
pub use charge_point::ChargePoint;
pub use currency::Currency;
pub use token::TokenResponse;
pub use wallet::Wallet;
pub use wallet_transaction::WalletTransaction;

use serde_json::Value;
use tracing::debug;

use crate::config::{DecodeConfig, EncodeConfig};
use crate::error::{kind_of, DecodeError};
use crate::wire::WireMap;

/// Decode a resource from its wire mapping
pub trait FromWire: Sized {
    /// Resource name used in error messages
    const ENTITY: &'static str;

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError>;

    fn from_map(map: &WireMap) -> Result<Self, DecodeError> {
        Self::from_map_with(map, &DecodeConfig::default())
    }

    fn from_value_with(value: &Value, config: &DecodeConfig) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Self::from_map_with(map, config),
            other => Err(DecodeError::NotAnObject {
                entity: Self::ENTITY,
                found: kind_of(other),
            }),
        }
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        Self::from_value_with(value, &DecodeConfig::default())
    }

    /// Parse and decode a JSON document
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

/// Encode a resource back into its wire mapping
pub trait ToWire {
    fn to_map_with(&self, config: &EncodeConfig) -> WireMap;

    fn to_map(&self) -> WireMap {
        self.to_map_with(&EncodeConfig::default())
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

/// Decode every element of a JSON array, preserving order
///
/// Fails on the first element that does not decode, reporting its index.
pub fn decode_list<T: FromWire>(
    items: &[Value],
    config: &DecodeConfig,
) -> Result<Vec<T>, DecodeError> {
    decode_elements(items, config, T::ENTITY)
}

pub(crate) fn decode_elements<T: FromWire>(
    items: &[Value],
    config: &DecodeConfig,
    parent: &'static str,
) -> Result<Vec<T>, DecodeError> {
    debug!("Decoding {} {} records for {}", items.len(), T::ENTITY, parent);

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_value_with(item, config).map_err(|source| DecodeError::Element {
                parent,
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
