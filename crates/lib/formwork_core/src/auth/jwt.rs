//! Session token codec — JWT generation and verification.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::info;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Session token lifetime: 7 days.
pub const SESSION_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Generate a signed session token (HS256, 7 day expiry).
pub fn mint_session_token(user_id: &str, secret: &[u8]) -> Result<String, AuthError> {
    mint_session_token_at(user_id, secret, Utc::now())
}

/// Generate a signed session token with an explicit issue time.
///
/// The expiry horizon is fixed at mint time; tests use this to fabricate
/// tokens that are already past their expiry.
pub fn mint_session_token_at(
    user_id: &str,
    secret: &[u8],
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let claims = TokenClaims {
        sub: user_id.to_string(),
        jti: crate::uuid::uuidv7().to_string(),
        exp: (now + Duration::days(SESSION_TOKEN_EXPIRY_DAYS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// Malformed input, a bad signature, and an elapsed expiry all collapse to
/// `None`; callers cannot tell which check failed.
pub fn verify_session_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

/// Resolve the JWT secret: env var `JWT_SECRET` → `AUTH_SECRET` → persisted file.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(secret) = std::env::var("AUTH_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formwork")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn mint_then_verify_roundtrip() {
        let token = mint_session_token("user-1", SECRET).expect("mint");
        let claims = verify_session_token(&token, SECRET).expect("verify");
        assert_eq!(claims.sub, "user-1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expiry_horizon_is_seven_days() {
        let now = Utc::now();
        let token = mint_session_token_at("user-1", SECRET, now).expect("mint");
        let claims = verify_session_token(&token, SECRET).expect("verify");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(
            claims.exp,
            (now + Duration::days(SESSION_TOKEN_EXPIRY_DAYS)).timestamp()
        );
    }

    #[test]
    fn repeated_mints_are_distinct() {
        let now = Utc::now();
        let a = mint_session_token_at("user-1", SECRET, now).expect("mint");
        let b = mint_session_token_at("user-1", SECRET, now).expect("mint");
        assert_ne!(a, b);
    }

    #[test]
    fn expired_token_fails_verification() {
        // Issued 8 days ago — past the 7 day horizon.
        let issued = Utc::now() - Duration::days(SESSION_TOKEN_EXPIRY_DAYS + 1);
        let token = mint_session_token_at("user-1", SECRET, issued).expect("mint");
        assert!(verify_session_token(&token, SECRET).is_none());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = mint_session_token("user-1", SECRET).expect("mint");
        assert!(verify_session_token(&token, b"other-secret").is_none());
    }

    #[test]
    fn tampered_token_fails_verification() {
        let token = mint_session_token("user-1", SECRET).expect("mint");
        let mut tampered = token.into_bytes();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();
        assert!(verify_session_token(&tampered, SECRET).is_none());
    }

    #[test]
    fn malformed_token_fails_verification() {
        assert!(verify_session_token("", SECRET).is_none());
        assert!(verify_session_token("not-a-jwt", SECRET).is_none());
        assert!(verify_session_token("a.b.c", SECRET).is_none());
    }
}
