//! Decoding errors
//!
//! Missing or wrong-typed required fields are the only hard failures in this
//! crate. Every error names the entity and the wire key that caused it.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding a wire payload
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{entity}: missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: field `{field}` expected {expected}, found {found}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{entity}: expected a JSON object, found {found}")]
    NotAnObject {
        entity: &'static str,
        found: String,
    },

    #[error("{parent}[{index}]: {source}")]
    Element {
        /// Location of the list, e.g. `ChargePoint.charges`
        parent: &'static str,
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Wire key of the field that failed, if the error is tied to one
    ///
    /// For list elements this is the field inside the failing element.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingField { field, .. } | DecodeError::InvalidField { field, .. } => {
                Some(field)
            }
            DecodeError::Element { source, .. } => source.field(),
            DecodeError::NotAnObject { .. } | DecodeError::Json(_) => None,
        }
    }

    /// Entity whose decoding failed
    pub fn entity(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingField { entity, .. }
            | DecodeError::InvalidField { entity, .. }
            | DecodeError::NotAnObject { entity, .. } => Some(entity),
            DecodeError::Element { source, .. } => source.entity(),
            DecodeError::Json(_) => None,
        }
    }
}

/// Short description of a JSON value's type, used in error messages
pub(crate) fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(a) => format!("array of {}", a.len()),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_message() {
        let err = DecodeError::MissingField {
            entity: "Charge",
            field: "id",
        };
        assert_eq!(err.to_string(), "Charge: missing required field `id`");
        assert_eq!(err.field(), Some("id"));
        assert_eq!(err.entity(), Some("Charge"));
    }

    #[test]
    fn test_element_error_reports_path() {
        let err = DecodeError::Element {
            parent: "ChargePoint.charges",
            index: 1,
            source: Box::new(DecodeError::MissingField {
                entity: "Charge",
                field: "id",
            }),
        };
        assert_eq!(
            err.to_string(),
            "ChargePoint.charges[1]: Charge: missing required field `id`"
        );
        assert_eq!(err.entity(), Some("Charge"));
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!("x")), "string \"x\"");
        assert_eq!(kind_of(&json!([1, 2])), "array of 2");
        assert_eq!(kind_of(&json!({})), "object");
    }
}
