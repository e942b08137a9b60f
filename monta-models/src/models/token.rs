//! Authentication token pair
//!
//! Only decoded here; refreshing is done by the auth layer.

use chrono::{DateTime, Utc};

use crate::config::DecodeConfig;
use crate::error::DecodeError;
use crate::models::FromWire;
use crate::wire::{Fields, WireMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub access_token_expiration_date: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expiration_date: DateTime<Utc>,
    pub user_id: Option<String>,
}

impl FromWire for TokenResponse {
    const ENTITY: &'static str = "TokenResponse";

    fn from_map_with(map: &WireMap, config: &DecodeConfig) -> Result<Self, DecodeError> {
        let fields = Fields::new(Self::ENTITY, map, config);

        Ok(Self {
            access_token: fields.required_str("accessToken")?,
            access_token_expiration_date: fields.required_instant("accessTokenExpirationDate")?,
            refresh_token: fields.required_str("refreshToken")?,
            refresh_token_expiration_date: fields.required_instant("refreshTokenExpirationDate")?,
            user_id: fields.str_opt("userId")?,
        })
    }
}

impl TokenResponse {
    /// Whether the access token has expired at `now`
    pub fn access_token_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.access_token_expiration_date
    }

    /// Whether the refresh token has expired at `now`
    pub fn refresh_token_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.refresh_token_expiration_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::{json, Value};

    fn payload() -> Value {
        json!({
            "accessToken": "access-abc",
            "accessTokenExpirationDate": "2024-05-01T12:00:00Z",
            "refreshToken": "refresh-xyz",
            "refreshTokenExpirationDate": "2024-06-01T12:00:00Z",
            "userId": "user-1"
        })
    }

    #[test]
    fn test_decode_token_response() {
        let token = TokenResponse::from_value(&payload()).unwrap();

        assert_eq!(token.access_token, "access-abc");
        assert_eq!(token.refresh_token, "refresh-xyz");
        assert_eq!(
            token.access_token_expiration_date,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(token.user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_user_id_is_optional() {
        let mut data = payload();
        data.as_object_mut().unwrap().remove("userId");
        let token = TokenResponse::from_value(&data).unwrap();
        assert_eq!(token.user_id, None);
    }

    #[test]
    fn test_missing_required_fields() {
        for key in [
            "accessToken",
            "accessTokenExpirationDate",
            "refreshToken",
            "refreshTokenExpirationDate",
        ] {
            let mut data = payload();
            data.as_object_mut().unwrap().remove(key);
            let err = TokenResponse::from_value(&data).unwrap_err();
            assert_eq!(err.field(), Some(key));
            assert!(matches!(err, DecodeError::MissingField { .. }));
        }
    }

    #[test]
    fn test_unparsable_expiration_fails() {
        let mut data = payload();
        data["refreshTokenExpirationDate"] = json!("soon");
        let err = TokenResponse::from_value(&data).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidField {
                field: "refreshTokenExpirationDate",
                ..
            }
        ));
    }

    #[test]
    fn test_expiry_checks() {
        let token = TokenResponse::from_value(&payload()).unwrap();
        let expiry = token.access_token_expiration_date;

        assert!(!token.access_token_expired(expiry - Duration::seconds(1)));
        assert!(token.access_token_expired(expiry));
        assert!(!token.refresh_token_expired(expiry));
    }
}
