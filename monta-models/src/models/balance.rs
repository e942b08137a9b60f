//! Wallet balance value object

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::wire::{Fields, WireMap};

/// Balance of a wallet in its own currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub amount: f64,
    pub credit: f64,
}

impl Balance {
    pub const ENTITY: &'static str = "Balance";

    /// Decode an embedded balance; `None` and `{}` both yield `None`
    pub fn from_object(
        data: Option<&WireMap>,
        config: &DecodeConfig,
    ) -> Result<Option<Self>, DecodeError> {
        let Some(map) = data.filter(|m| !m.is_empty()) else {
            return Ok(None);
        };
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Some(Self {
            amount: fields.f64_or("amount", 0.0)?,
            credit: fields.f64_or("credit", 0.0)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_empty_yield_none() {
        assert_eq!(Balance::from_object(None, &DecodeConfig::default()).unwrap(), None);
        let empty = json!({});
        assert_eq!(
            Balance::from_object(empty.as_object(), &DecodeConfig::default()).unwrap(),
            None
        );
    }

    #[test]
    fn test_negative_amounts_and_integer_values() {
        let source = json!({"amount": -12.75, "credit": 100});
        let balance = Balance::from_object(source.as_object(), &DecodeConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(balance.amount, -12.75);
        assert_eq!(balance.credit, 100.0);
    }

    #[test]
    fn test_missing_credit_defaults_to_zero() {
        let source = json!({"amount": 5.0});
        let balance = Balance::from_object(source.as_object(), &DecodeConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(balance.credit, 0.0);
    }
}
