//! Signed session tokens.
//!
//! Tokens are stateless: nothing is stored server-side and there is no
//! revocation list, so a token stays usable until its expiry elapses.
//! Verification is a pure computation against the process-wide secret.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cli::globals::GlobalArgs;

/// Seconds a session token stays valid after issuance
pub const TOKEN_EXPIRATION: i64 = 3600; // 1 hour

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub username: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn new(account_id: Uuid, username: String) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: account_id.to_string(),
            username,
            iat: now,
            exp: now + TOKEN_EXPIRATION,
        }
    }
}

/// Sign claims with the server secret.
///
/// # Errors
///
/// Returns an error if the signing backend fails.
pub fn sign(globals: &GlobalArgs, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_secret(globals.token_secret.expose_secret().as_bytes());

    encode(&Header::default(), claims, &key)
}

/// Verify a token's signature and expiry, returning its claims.
///
/// # Errors
///
/// Returns an error for a malformed token, a signature that does not match
/// the current secret, or an elapsed expiry.
pub fn verify(globals: &GlobalArgs, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(globals.token_secret.expose_secret().as_bytes());

    let mut validation = Validation::default();
    validation.leeway = 0; // the 1 hour window is exact, no grace period

    Ok(decode::<Claims>(token, &key, &validation)?.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globals() -> GlobalArgs {
        GlobalArgs::new(String::from("test-secret").into())
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let globals = globals();
        let account_id = Uuid::new_v4();
        let claims = Claims::new(account_id, "alice".to_string());

        let token = sign(&globals, &claims).unwrap();
        let decoded = verify(&globals, &token).unwrap();

        assert_eq!(decoded.sub, account_id.to_string());
        assert_eq!(decoded.username, "alice");
        assert_eq!(decoded.exp, decoded.iat + TOKEN_EXPIRATION);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = Claims::new(Uuid::new_v4(), "alice".to_string());
        let token = sign(&globals(), &claims).unwrap();

        let other = GlobalArgs::new(String::from("other-secret").into());
        assert!(verify(&other, &token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let globals = globals();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            iat: now - 2 * TOKEN_EXPIRATION,
            exp: now - TOKEN_EXPIRATION,
        };

        let token = sign(&globals, &claims).unwrap();
        assert!(verify(&globals, &token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let globals = globals();
        let claims = Claims::new(Uuid::new_v4(), "alice".to_string());
        let mut token = sign(&globals, &claims).unwrap();

        token.pop();
        token.push('x');

        assert!(verify(&globals, &token).is_err());
    }
}
