//! Session store — the single source of truth for token liveness.
//!
//! A signature-valid, unexpired token authenticates a request only while a
//! matching row exists here. Deleting the row is what makes logout
//! effective before the token's natural expiry.

use sha2::{Digest, Sha256};
use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::SessionRecord;
use crate::uuid::uuidv7;

/// SHA-256 hash a session token for storage.
///
/// Only the digest touches the database; lookup is exact-match on it.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Persist a new session. A user may hold any number of live sessions.
pub async fn create_session(
    pool: &PgPool,
    token_hash: &str,
    user_id: &str,
    expires_at: chrono::DateTime<chrono::Utc>,
) -> Result<SessionRecord, AuthError> {
    let row = sqlx::query_as::<_, (String, chrono::DateTime<chrono::Utc>)>(
        "INSERT INTO sessions (id, token_hash, user_id, expires_at) \
         VALUES ($1, $2, $3::uuid, $4) \
         RETURNING id::text, created_at",
    )
    .bind(uuidv7())
    .bind(token_hash)
    .bind(user_id)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(SessionRecord {
        id: row.0,
        user_id: user_id.to_string(),
        created_at: row.1,
        expires_at,
    })
}

/// Look up a session by exact token-hash match.
///
/// Expiry is the codec's job; membership here is check (c) of the liveness
/// conjunction.
pub async fn find_live_session(
    pool: &PgPool,
    token_hash: &str,
) -> Result<Option<SessionRecord>, AuthError> {
    let row = sqlx::query_as::<_, SessionRecord>(
        "SELECT id::text AS id, user_id::text AS user_id, created_at, expires_at \
         FROM sessions WHERE token_hash = $1",
    )
    .bind(token_hash)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Delete a session, returning whether a row was actually removed.
///
/// Idempotent: deleting an absent token is not an error. The single DELETE
/// statement is the atomic arbiter between concurrent logouts — only one
/// caller observes `true`.
pub async fn delete_session(pool: &PgPool, token_hash: &str) -> Result<bool, AuthError> {
    let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove rows for tokens past their natural expiry.
///
/// Dead weight only: the codec already rejects these tokens, so this is
/// never required for correctness.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, AuthError> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hash_is_stable_hex() {
        let a = hash_session_token("some-token");
        let b = hash_session_token("some-token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn distinct_tokens_hash_differently() {
        assert_ne!(hash_session_token("token-a"), hash_session_token("token-b"));
    }
}
