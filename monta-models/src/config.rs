//! Decode and encode configuration
//!
//! Both directions default to the lenient behaviour of the Monta API client:
//! wrong-typed optional fields fall back to their defaults, and absent values
//! are written as explicit `null`.

use chrono::SecondsFormat;

/// Settings applied by every decoder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Reject wrong-typed optional fields instead of substituting defaults
    pub strict_types: bool,
}

impl DecodeConfig {
    /// Lenient configuration (the default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on wrong-typed optional fields
    pub fn strict() -> Self {
        Self { strict_types: true }
    }

    /// Set type strictness
    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }
}

/// How an encoder writes fields that hold no value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentFields {
    /// Write the key with a `null` value
    #[default]
    Null,
    /// Leave the key out of the mapping
    Omit,
}

/// Settings applied by every encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    pub absent: AbsentFields,

    /// Fractional-second rendering of timestamps
    pub seconds: SecondsFormat,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            absent: AbsentFields::Null,
            seconds: SecondsFormat::AutoSi,
        }
    }
}

impl EncodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave absent fields out instead of writing `null`
    pub fn omit_absent(mut self) -> Self {
        self.absent = AbsentFields::Omit;
        self
    }

    /// Set timestamp precision
    pub fn with_seconds(mut self, seconds: SecondsFormat) -> Self {
        self.seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_config_builder() {
        assert!(!DecodeConfig::new().strict_types);
        assert!(DecodeConfig::strict().strict_types);
        assert!(!DecodeConfig::strict().with_strict_types(false).strict_types);
    }

    #[test]
    fn test_encode_config_builder() {
        let config = EncodeConfig::new()
            .omit_absent()
            .with_seconds(SecondsFormat::Millis);

        assert_eq!(config.absent, AbsentFields::Omit);
        assert_eq!(config.seconds, SecondsFormat::Millis);
        assert_eq!(EncodeConfig::default().absent, AbsentFields::Null);
    }
}
