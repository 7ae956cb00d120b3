//! Authentication domain models.
//!
//! These are internal domain models, distinct from the API request/response
//! models (which carry `#[serde(rename)]` for camelCase etc.).

use serde::{Deserialize, Serialize};

/// Domain user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Session record stored in the database.
///
/// The plaintext token never touches the database; `token_hash` is its
/// SHA-256 digest and the row's existence is what keeps the token live.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: String,
    pub user_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// Token ID (standard JWT `jti` claim). Concurrent logins for the same
    /// user must mint distinct tokens.
    pub jti: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
