//! # Bearer Token Payload
//!
//! Reads the claims segment of a JWT-shaped bearer token **without verifying
//! its signature**. The result identifies who the stored session claims to be
//! and must never be used for an authorization decision.

use lib_utils::b64;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Claims read from the middle segment of a bearer token.
///
/// Issuers disagree on claim types, so reading is lenient: string claims
/// accept numbers (rendered as text) and `null`/missing (empty string), and
/// timestamps accept integers or floats. Anything else in a timestamp slot
/// reads as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnverifiedClaims {
    /// Subject (user ID)
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub: String,
    /// Display name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Email address
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    /// Expiration time (Unix timestamp)
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp: Option<i64>,
    /// Issued at time (Unix timestamp)
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<i64>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// Reasons a stored token could not be read.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] b64::Error),

    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Decode the payload (second `.`-separated segment) of `token`.
///
/// Fails only when the segment is missing, is not base64url, is not JSON, or
/// is JSON but not an object. Unexpected claim types never fail.
pub fn decode_unverified(token: &str) -> Result<UnverifiedClaims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let json = b64::b64u_decode_to_string(payload)?;
    let value: Value = serde_json::from_str(&json)?;
    if !value.is_object() {
        return Err(TokenError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}
