//! Per-field extraction and emission for wire mappings
//!
//! Every decoder reads its payload through [`Fields`], which makes the
//! presence policy of each field explicit: required fields fail with
//! [`DecodeError::MissingField`], optional fields fall back to a named
//! default. A JSON `null` counts as a missing key.
//!
//! Wrong-typed optional values follow [`DecodeConfig::strict_types`]: in the
//! default lenient mode they are logged and replaced by the default, in
//! strict mode they fail with [`DecodeError::InvalidField`].

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::{AbsentFields, DecodeConfig, EncodeConfig};
use crate::error::{kind_of, DecodeError};
use crate::timestamp::{format_datetime, parse_datetime};

/// A JSON object as received from the API
pub type WireMap = Map<String, Value>;

/// Read-only view of one wire mapping while decoding a single entity
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    entity: &'static str,
    map: &'a WireMap,
    config: &'a DecodeConfig,
}

impl<'a> Fields<'a> {
    pub fn new(entity: &'static str, map: &'a WireMap, config: &'a DecodeConfig) -> Self {
        Self { entity, map, config }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn config(&self) -> &'a DecodeConfig {
        self.config
    }

    /// Value under `key`, with `null` folded into `None`
    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn invalid(&self, field: &'static str, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::InvalidField {
            entity: self.entity,
            field,
            expected,
            found: kind_of(found),
        }
    }

    fn missing(&self, field: &'static str) -> DecodeError {
        DecodeError::MissingField {
            entity: self.entity,
            field,
        }
    }

    /// Apply the wrong-type policy to an optional field
    fn mismatch<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        found: &Value,
        fallback: T,
    ) -> Result<T, DecodeError> {
        if self.config.strict_types {
            return Err(self.invalid(field, expected, found));
        }
        warn!(
            "{}: field `{}` expected {}, found {}; using default",
            self.entity,
            field,
            expected,
            kind_of(found)
        );
        Ok(fallback)
    }

    // ------------------------------------------------------------------
    // Required fields
    // ------------------------------------------------------------------

    pub fn required_i64(&self, key: &'static str) -> Result<i64, DecodeError> {
        let value = self.present(key).ok_or_else(|| self.missing(key))?;
        value
            .as_i64()
            .ok_or_else(|| self.invalid(key, "integer", value))
    }

    pub fn required_str(&self, key: &'static str) -> Result<String, DecodeError> {
        let value = self.present(key).ok_or_else(|| self.missing(key))?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(key, "string", value))
    }

    /// Required timestamp; an unparsable value is an error here
    pub fn required_instant(&self, key: &'static str) -> Result<DateTime<Utc>, DecodeError> {
        let value = self.present(key).ok_or_else(|| self.missing(key))?;
        parse_datetime(value).ok_or_else(|| self.invalid(key, "ISO-8601 timestamp", value))
    }

    // ------------------------------------------------------------------
    // Optional fields
    // ------------------------------------------------------------------

    pub fn i64_opt(&self, key: &'static str) -> Result<Option<i64>, DecodeError> {
        match self.present(key) {
            None => Ok(None),
            Some(value) => match value.as_i64() {
                Some(n) => Ok(Some(n)),
                None => self.mismatch(key, "integer", value, None),
            },
        }
    }

    pub fn i64_or(&self, key: &'static str, default: i64) -> Result<i64, DecodeError> {
        Ok(self.i64_opt(key)?.unwrap_or(default))
    }

    /// Non-negative integer that fits in `u32`
    pub fn u32_or(&self, key: &'static str, default: u32) -> Result<u32, DecodeError> {
        match self.present(key) {
            None => Ok(default),
            Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => Ok(n),
                None => self.mismatch(key, "non-negative integer", value, default),
            },
        }
    }

    pub fn f64_or(&self, key: &'static str, default: f64) -> Result<f64, DecodeError> {
        match self.present(key) {
            None => Ok(default),
            Some(value) => match value.as_f64() {
                Some(n) => Ok(n),
                None => self.mismatch(key, "number", value, default),
            },
        }
    }

    pub fn bool_or(&self, key: &'static str, default: bool) -> Result<bool, DecodeError> {
        match self.present(key) {
            None => Ok(default),
            Some(value) => match value.as_bool() {
                Some(b) => Ok(b),
                None => self.mismatch(key, "boolean", value, default),
            },
        }
    }

    pub fn str_opt(&self, key: &'static str) -> Result<Option<String>, DecodeError> {
        match self.present(key) {
            None => Ok(None),
            Some(value) => match value.as_str() {
                Some(s) => Ok(Some(s.to_string())),
                None => self.mismatch(key, "string", value, None),
            },
        }
    }

    pub fn str_or(&self, key: &'static str, default: &str) -> Result<String, DecodeError> {
        Ok(self.str_opt(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Optional timestamp; unparsable strings are absent in every mode
    pub fn instant(&self, key: &'static str) -> Option<DateTime<Utc>> {
        parse_datetime(self.present(key))
    }

    /// Nested object; a wrong-typed value follows the mismatch policy
    pub fn object(&self, key: &'static str) -> Result<Option<&'a WireMap>, DecodeError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(value) => self.mismatch(key, "object", value, None),
        }
    }

    pub fn array(&self, key: &'static str) -> Result<Option<&'a Vec<Value>>, DecodeError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(value) => self.mismatch(key, "array", value, None),
        }
    }
}

/// Builder for an outbound wire mapping
#[derive(Debug)]
pub struct WireWriter<'a> {
    map: WireMap,
    config: &'a EncodeConfig,
}

impl<'a> WireWriter<'a> {
    pub fn new(config: &'a EncodeConfig) -> Self {
        Self {
            map: WireMap::new(),
            config,
        }
    }

    pub fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    /// Write an optional value, honouring [`EncodeConfig::absent`]
    pub fn put_opt(mut self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match (value, self.config.absent) {
            (Some(v), _) => {
                self.map.insert(key.to_string(), v.into());
            }
            (None, AbsentFields::Null) => {
                self.map.insert(key.to_string(), Value::Null);
            }
            (None, AbsentFields::Omit) => {}
        }
        self
    }

    pub fn put_instant(self, key: &str, instant: Option<&DateTime<Utc>>) -> Self {
        let seconds = self.config.seconds;
        self.put_opt(key, instant.map(|dt| format_datetime(dt, seconds)))
    }

    pub fn finish(self) -> WireMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> WireMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_required_fields() {
        let config = DecodeConfig::default();
        let data = map(json!({"id": 42, "token": "abc", "nullId": null, "textId": "42"}));
        let fields = Fields::new("Test", &data, &config);

        assert_eq!(fields.required_i64("id").unwrap(), 42);
        assert_eq!(fields.required_str("token").unwrap(), "abc");
        assert!(matches!(
            fields.required_i64("missing"),
            Err(DecodeError::MissingField { field: "missing", .. })
        ));
        assert!(matches!(
            fields.required_i64("nullId"),
            Err(DecodeError::MissingField { field: "nullId", .. })
        ));
        assert!(matches!(
            fields.required_i64("textId"),
            Err(DecodeError::InvalidField { field: "textId", expected: "integer", .. })
        ));
    }

    #[test]
    fn test_defaults_on_missing_and_null() {
        let config = DecodeConfig::default();
        let data = map(json!({"state": null}));
        let fields = Fields::new("Test", &data, &config);

        assert_eq!(fields.str_or("state", "").unwrap(), "");
        assert_eq!(fields.f64_or("amount", 1.5).unwrap(), 1.5);
        assert_eq!(fields.u32_or("decimals", 2).unwrap(), 2);
        assert!(!fields.bool_or("flag", false).unwrap());
        assert_eq!(fields.i64_opt("ref").unwrap(), None);
        assert_eq!(fields.instant("createdAt"), None);
        assert!(fields.object("nested").unwrap().is_none());
        assert!(fields.array("items").unwrap().is_none());
    }

    #[test]
    fn test_lenient_mismatch_uses_default() {
        let config = DecodeConfig::default();
        let data = map(json!({"amount": "12.5", "decimals": -1, "flag": "yes", "nested": 3}));
        let fields = Fields::new("Test", &data, &config);

        assert_eq!(fields.f64_or("amount", 0.0).unwrap(), 0.0);
        assert_eq!(fields.u32_or("decimals", 2).unwrap(), 2);
        assert!(!fields.bool_or("flag", false).unwrap());
        assert!(fields.object("nested").unwrap().is_none());
    }

    #[test]
    fn test_strict_mismatch_fails() {
        let config = DecodeConfig::strict();
        let data = map(json!({"amount": "12.5", "createdAt": "garbage"}));
        let fields = Fields::new("Test", &data, &config);

        assert!(matches!(
            fields.f64_or("amount", 0.0),
            Err(DecodeError::InvalidField { field: "amount", expected: "number", .. })
        ));
        // Unparsable optional timestamps stay absent even in strict mode
        assert_eq!(fields.instant("createdAt"), None);
    }

    #[test]
    fn test_writer_absent_policy() {
        let null_config = EncodeConfig::default();
        let written = WireWriter::new(&null_config)
            .put("id", 1)
            .put_opt("note", None::<String>)
            .finish();
        assert_eq!(Value::Object(written), json!({"id": 1, "note": null}));

        let omit_config = EncodeConfig::new().omit_absent();
        let written = WireWriter::new(&omit_config)
            .put("id", 1)
            .put_opt("note", None::<String>)
            .finish();
        assert_eq!(Value::Object(written), json!({"id": 1}));
    }
}
