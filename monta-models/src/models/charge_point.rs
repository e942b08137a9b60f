//! Charge point (charging station)

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::models::{decode_elements, Charge, FromWire};
use crate::wire::{Fields, WireMap};

/// A charging station and, when the API embeds them, its charges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargePoint {
    pub id: i64,
    pub name: String,
    pub serial_number: Option<String>,
    pub kind: String,
    pub state: String,
    pub visibility: String,
    pub last_meter_reading_kwh: f64,
    pub brand_name: String,
    pub model_name: String,
    pub firmware_version: String,
    pub cable_plugged_in: bool,
    /// Embedded charges in payload order
    pub charges: Vec<Charge>,
}

impl FromWire for ChargePoint {
    const ENTITY: &'static str = "ChargePoint";

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Self {
            id: fields.required_i64("id")?,
            name: fields.str_or("name", "")?,
            serial_number: fields.str_opt("serialNumber")?,
            kind: fields.str_or("type", "")?,
            state: fields.str_or("state", "")?,
            visibility: fields.str_or("visibility", "")?,
            last_meter_reading_kwh: fields.f64_or("lastMeterReadingKwh", 0.0)?,
            brand_name: fields.str_or("brandName", "")?,
            model_name: fields.str_or("modelName", "")?,
            firmware_version: fields.str_or("firmwareVersion", "")?,
            cable_plugged_in: fields.bool_or("cablePluggedIn", false)?,
            charges: match fields.array("charges")? {
                Some(items) if !items.is_empty() => {
                    decode_elements(items, config, "ChargePoint.charges")?
                }
                _ => Vec::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_point_full_payload() {
        let cp = ChargePoint::from_value(&json!({
            "id": 12,
            "name": "Garage",
            "serialNumber": "SN-0001",
            "type": "ac",
            "state": "available",
            "visibility": "private",
            "lastMeterReadingKwh": 1532.25,
            "brandName": "Easee",
            "modelName": "Home",
            "firmwareVersion": "1.2.3",
            "cablePluggedIn": true
        }))
        .unwrap();

        assert_eq!(cp.id, 12);
        assert_eq!(cp.serial_number.as_deref(), Some("SN-0001"));
        assert_eq!(cp.kind, "ac");
        assert_eq!(cp.last_meter_reading_kwh, 1532.25);
        assert!(cp.cable_plugged_in);
        assert!(cp.charges.is_empty());
    }

    #[test]
    fn test_defaults_when_only_id() {
        let cp = ChargePoint::from_value(&json!({"id": 3})).unwrap();
        assert_eq!(
            cp,
            ChargePoint {
                id: 3,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_missing_id_fails() {
        let err = ChargePoint::from_value(&json!({"name": "Garage"})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { entity: "ChargePoint", field: "id" }));
    }

    #[test]
    fn test_empty_and_missing_charges() {
        let empty = ChargePoint::from_value(&json!({"id": 1, "charges": []})).unwrap();
        let missing = ChargePoint::from_value(&json!({"id": 1})).unwrap();
        let null = ChargePoint::from_value(&json!({"id": 1, "charges": null})).unwrap();
        assert!(empty.charges.is_empty());
        assert!(missing.charges.is_empty());
        assert!(null.charges.is_empty());
    }

    #[test]
    fn test_charges_keep_order() {
        let cp = ChargePoint::from_value(&json!({
            "id": 1,
            "charges": [
                {"id": 1, "state": "completed"},
                {"id": 2, "state": "charging", "startedAt": "2024-03-01T08:00:00Z"}
            ]
        }))
        .unwrap();

        assert_eq!(cp.charges.len(), 2);
        assert_eq!(cp.charges[0].id, 1);
        assert_eq!(cp.charges[1].id, 2);
        assert!(cp.charges[1].started_at.is_some());
    }

    #[test]
    fn test_bad_charge_element_propagates() {
        let err = ChargePoint::from_value(&json!({
            "id": 1,
            "charges": [{"id": 1}, {"state": "charging"}]
        }))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "ChargePoint.charges[1]: Charge: missing required field `id`"
        );
    }
}
