//! User queries consumed by the auth flows.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::User;

/// Fetch a user by email, returning (id, name, password_hash).
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<(String, Option<String>, String)>, AuthError> {
    let row = sqlx::query_as::<_, (String, Option<String>, String)>(
        "SELECT id::text, name, password_hash FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a new user, returning the full record.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    name: Option<&str>,
    password_hash: &str,
) -> Result<User, AuthError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) \
         RETURNING id::text AS id, email, name, created_at, updated_at",
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Fetch a user's profile by ID.
pub async fn get_user_by_id(pool: &PgPool, user_id: &str) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, User>(
        "SELECT id::text AS id, email, name, created_at, updated_at \
         FROM users WHERE id = $1::uuid",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
