//! Authentication and session logic.
//!
//! Provides password hashing, the session token codec, the session store,
//! and the user queries the auth flows depend on.

pub mod jwt;
pub mod password;
pub mod queries;
pub mod sessions;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    CredentialError,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
