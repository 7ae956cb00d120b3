//! Session lifecycle — issuance, validation, and revocation.
//!
//! A token authenticates a request only while all three hold: its signature
//! verifies, its expiry has not passed, and its session row still exists.
//! Logout deletes the row, killing the token ahead of its natural expiry.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::info;

use formwork_core::auth::jwt::{
    SESSION_TOKEN_EXPIRY_DAYS, mint_session_token, verify_session_token,
};
use formwork_core::auth::password::{hash_password, verify_password};
use formwork_core::auth::queries;
use formwork_core::auth::sessions::{
    create_session, delete_session, find_live_session, hash_session_token,
};
use formwork_core::models::auth::User;

use crate::error::{AppError, AppResult};
use crate::models::{LogoutResponse, SessionResponse};

/// Authenticate with email + password and issue a session token.
///
/// An unknown email and a wrong password take the same exit: one
/// undifferentiated credential error.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<SessionResponse> {
    let row = queries::find_user_by_email(pool, email).await?;

    let (user_id, _name, pw_hash) = match row {
        None => return Err(AppError::invalid_credentials()),
        Some(r) => r,
    };

    if !verify_password(password, &pw_hash)? {
        return Err(AppError::invalid_credentials());
    }

    issue_session(pool, &user_id, jwt_secret).await
}

/// Register a new user account and issue its first session.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: Option<&str>,
    jwt_secret: &[u8],
) -> AppResult<SessionResponse> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    if queries::email_exists(pool, email).await? {
        return Err(AppError::Validation("Email already registered".into()));
    }

    let pw_hash = hash_password(password)?;
    let user = queries::create_user(pool, email, name, &pw_hash).await?;
    info!(email, "registered new user");

    issue_session(pool, &user.id, jwt_secret).await
}

/// Resolve a presented token to its user, or fail closed.
///
/// Codec check, store liveness check, user resolution — each miss returns
/// the same rejection. Side-effect free.
pub async fn validate(pool: &PgPool, token: &str, jwt_secret: &[u8]) -> AppResult<User> {
    let _claims =
        verify_session_token(token, jwt_secret).ok_or_else(AppError::unauthenticated)?;

    let token_hash = hash_session_token(token);
    let session = find_live_session(pool, &token_hash)
        .await?
        .ok_or_else(AppError::unauthenticated)?;

    // The session row, not the claims, is the authority on identity; a user
    // deleted since issuance must also fail closed.
    queries::get_user_by_id(pool, &session.user_id)
        .await?
        .ok_or_else(AppError::unauthenticated)
}

/// Revoke the presented token by deleting its session row.
///
/// Validation runs first: a token that is already dead cannot be logged
/// out. The DELETE's row count arbitrates concurrent logouts — when two
/// race, only the one that removed the row reports success.
pub async fn logout(pool: &PgPool, token: &str, jwt_secret: &[u8]) -> AppResult<LogoutResponse> {
    let user = validate(pool, token, jwt_secret).await?;

    let token_hash = hash_session_token(token);
    if !delete_session(pool, &token_hash).await? {
        return Err(AppError::unauthenticated());
    }

    info!(user_id = %user.id, "session revoked");
    Ok(LogoutResponse {
        success: true,
        message: "Logged out successfully".into(),
    })
}

/// Mint a token and persist its session row.
async fn issue_session(
    pool: &PgPool,
    user_id: &str,
    jwt_secret: &[u8],
) -> AppResult<SessionResponse> {
    let token = mint_session_token(user_id, jwt_secret)?;
    let token_hash = hash_session_token(&token);

    let expires_at = Utc::now() + Duration::days(SESSION_TOKEN_EXPIRY_DAYS);
    create_session(pool, &token_hash, user_id, expires_at).await?;

    Ok(SessionResponse {
        token,
        user_id: user_id.to_string(),
    })
}
