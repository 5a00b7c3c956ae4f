use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims issued by the backend for an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub exp: i64,    // Expiration time
}

/// Reads the claims of an access token without checking its signature.
///
/// The client never holds the signing secret, so this is only used to
/// notice an expired token before sending it; the backend decides whether
/// the token is valid.
pub fn read_claims(token: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}

/// Whether the token carries an `exp` at or before `now`. Tokens that are
/// not readable JWTs are left for the backend to judge.
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    read_claims(token)
        .map(|claims| claims.exp <= now.timestamp())
        .unwrap_or(false)
}
