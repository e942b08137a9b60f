//! Timestamp normalization
//!
//! Monta timestamps arrive as ISO-8601 strings, sometimes with a `Z` suffix,
//! sometimes with an explicit offset and sometimes with no offset at all.
//! Everything is normalized to `DateTime<Utc>`; a string without an offset is
//! read as UTC. Unparsable input yields `None` and never an error.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;
use tracing::debug;

/// Date-time layouts carrying an offset, tried after RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Layouts without an offset; the result is stamped as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input accepted by [`parse_datetime`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInstant<'a> {
    /// Missing key or JSON `null`
    Absent,
    /// Already a typed instant
    Instant(DateTime<Utc>),
    /// Text to parse
    Text(&'a str),
    /// Any other JSON value (numbers, objects, ...)
    Other(&'a Value),
}

impl<'a> From<Option<&'a Value>> for RawInstant<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => RawInstant::Absent,
            Some(Value::String(s)) => RawInstant::Text(s),
            Some(other) => RawInstant::Other(other),
        }
    }
}

impl<'a> From<&'a Value> for RawInstant<'a> {
    fn from(value: &'a Value) -> Self {
        Some(value).into()
    }
}

impl<'a> From<Option<&'a str>> for RawInstant<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawInstant::Absent, RawInstant::Text)
    }
}

impl<'a> From<&'a str> for RawInstant<'a> {
    fn from(value: &'a str) -> Self {
        RawInstant::Text(value)
    }
}

impl From<DateTime<Utc>> for RawInstant<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        RawInstant::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for RawInstant<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        RawInstant::Instant(value.with_timezone(&Utc))
    }
}

/// Normalize a raw timestamp into a UTC instant
///
/// Returns `None` for absent input, empty strings, non-string values and
/// strings that match none of the accepted ISO-8601 layouts.
pub fn parse_datetime<'a>(raw: impl Into<RawInstant<'a>>) -> Option<DateTime<Utc>> {
    match raw.into() {
        RawInstant::Absent => None,
        RawInstant::Instant(instant) => Some(instant),
        RawInstant::Text(text) => parse_text(text),
        RawInstant::Other(value) => {
            debug!("Ignoring non-string timestamp value: {}", value);
            None
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    // Not every layout understands `Z`
    let normalized = text.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }

    debug!("Unparsable timestamp: {:?}", text);
    None
}

/// Render an instant as RFC 3339 with an explicit `+00:00` offset
pub fn format_datetime(instant: &DateTime<Utc>, seconds: SecondsFormat) -> String {
    instant.to_rfc3339_opts(seconds, false)
}
