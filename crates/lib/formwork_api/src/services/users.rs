//! User record operations with self-access enforcement.

use sqlx::PgPool;
use tracing::info;

use formwork_core::auth::queries;
use formwork_core::models::auth::User;
use formwork_core::users::queries as user_queries;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthenticatedUser, ensure_self};
use crate::models::UpdateUserRequest;

/// Fetch a user record. Self-only.
pub async fn get_user(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    user_id: &str,
) -> AppResult<User> {
    ensure_self(identity, user_id)?;
    queries::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// Update a user record. Self-only.
pub async fn update_user(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    user_id: &str,
    req: &UpdateUserRequest,
) -> AppResult<User> {
    ensure_self(identity, user_id)?;

    if let Some(email) = req.email.as_deref() {
        if email.trim().is_empty() {
            return Err(AppError::Validation("Email cannot be empty".into()));
        }
        if email != identity.0.email && queries::email_exists(pool, email).await? {
            return Err(AppError::Validation("Email already registered".into()));
        }
    }

    let user =
        user_queries::update_user(pool, user_id, req.email.as_deref(), req.name.as_deref())
            .await?;
    Ok(user)
}

/// Delete a user record. Self-only; sessions and owned forms cascade.
pub async fn delete_user(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    user_id: &str,
) -> AppResult<()> {
    ensure_self(identity, user_id)?;

    if !user_queries::delete_user(pool, user_id).await? {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }
    info!(user_id, "user deleted");
    Ok(())
}
