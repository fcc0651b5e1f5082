use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims we care about when verifying a bearer token. The service only
/// checks validity; it does no per-user authorization, so `sub` is optional.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: usize,
}

/// Verify the raw value of an `Authorization` header.
///
/// Accepts the token with or without a `Bearer ` prefix. Returns true only
/// for a well-formed HS256 token signed with `secret` and still valid.
/// Every failure mode collapses to false; the reason is logged for
/// operators, never surfaced to the caller.
pub fn validate_bearer(header_value: &str, secret: &[u8]) -> bool {
    if header_value.is_empty() {
        return false;
    }

    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::new(Algorithm::HS256),
    ) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("rejected bearer token: {e}");
            false
        }
    }
}
