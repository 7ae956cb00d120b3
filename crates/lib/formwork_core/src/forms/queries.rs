//! Form queries.

use sqlx::PgPool;

use super::FormsError;
use crate::models::forms::Form;
use crate::uuid::uuidv7;

const FORM_COLUMNS: &str =
    "id::text AS id, owner_id::text AS owner_id, title, description, created_at, updated_at";

/// Create a form owned by `owner_id`.
pub async fn create_form(
    pool: &PgPool,
    owner_id: &str,
    title: &str,
    description: Option<&str>,
) -> Result<Form, FormsError> {
    let sql = format!(
        "INSERT INTO forms (id, owner_id, title, description) \
         VALUES ($1, $2::uuid, $3, $4) \
         RETURNING {FORM_COLUMNS}"
    );
    let form = sqlx::query_as::<_, Form>(&sql)
        .bind(uuidv7())
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .fetch_one(pool)
        .await?;
    Ok(form)
}

/// List forms owned by a user, newest first.
pub async fn list_forms_for_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Form>, FormsError> {
    let sql = format!(
        "SELECT {FORM_COLUMNS} FROM forms WHERE owner_id = $1::uuid ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Form>(&sql)
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch a form by ID.
pub async fn get_form(pool: &PgPool, form_id: &str) -> Result<Option<Form>, FormsError> {
    let sql = format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = $1::uuid");
    let row = sqlx::query_as::<_, Form>(&sql)
        .bind(form_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Update a form. `None` fields keep their current value.
pub async fn update_form(
    pool: &PgPool,
    form_id: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Form, FormsError> {
    let sql = format!(
        r#"
        UPDATE forms SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            updated_at = now()
        WHERE id = $1::uuid
        RETURNING {FORM_COLUMNS}
        "#
    );
    let form = sqlx::query_as::<_, Form>(&sql)
        .bind(form_id)
        .bind(title)
        .bind(description)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| FormsError::NotFound(format!("Form {form_id} not found")))?;
    Ok(form)
}

/// Delete a form by ID. Child questions and responses cascade.
pub async fn delete_form(pool: &PgPool, form_id: &str) -> Result<bool, FormsError> {
    let result = sqlx::query("DELETE FROM forms WHERE id = $1::uuid")
        .bind(form_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
