//! User CRUD queries.

use sqlx::PgPool;

use super::UsersError;
use crate::models::auth::User;

/// Update a user's profile. `None` fields keep their current value.
pub async fn update_user(
    pool: &PgPool,
    user_id: &str,
    email: Option<&str>,
    name: Option<&str>,
) -> Result<User, UsersError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            email = COALESCE($2, email),
            name = COALESCE($3, name),
            updated_at = now()
        WHERE id = $1::uuid
        RETURNING id::text AS id, email, name, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| UsersError::NotFound(format!("User {user_id} not found")))?;
    Ok(user)
}

/// Delete a user by ID.
pub async fn delete_user(pool: &PgPool, user_id: &str) -> Result<bool, UsersError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1::uuid")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
