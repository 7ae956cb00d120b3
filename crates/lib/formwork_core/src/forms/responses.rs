//! Response queries.

use sqlx::PgPool;

use super::FormsError;
use crate::models::forms::FormResponse;
use crate::uuid::uuidv7;

const RESPONSE_COLUMNS: &str = "id::text AS id, form_id::text AS form_id, \
                                respondent_id::text AS respondent_id, answers, created_at";

/// Record a response to a form.
pub async fn create_response(
    pool: &PgPool,
    form_id: &str,
    respondent_id: &str,
    answers: &serde_json::Value,
) -> Result<FormResponse, FormsError> {
    let sql = format!(
        "INSERT INTO responses (id, form_id, respondent_id, answers) \
         VALUES ($1, $2::uuid, $3::uuid, $4) \
         RETURNING {RESPONSE_COLUMNS}"
    );
    let response = sqlx::query_as::<_, FormResponse>(&sql)
        .bind(uuidv7())
        .bind(form_id)
        .bind(respondent_id)
        .bind(answers)
        .fetch_one(pool)
        .await?;
    Ok(response)
}

/// List a form's responses, oldest first.
pub async fn list_responses(pool: &PgPool, form_id: &str) -> Result<Vec<FormResponse>, FormsError> {
    let sql = format!(
        "SELECT {RESPONSE_COLUMNS} FROM responses WHERE form_id = $1::uuid ORDER BY created_at"
    );
    let rows = sqlx::query_as::<_, FormResponse>(&sql)
        .bind(form_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch a response by ID.
pub async fn get_response(
    pool: &PgPool,
    response_id: &str,
) -> Result<Option<FormResponse>, FormsError> {
    let sql = format!("SELECT {RESPONSE_COLUMNS} FROM responses WHERE id = $1::uuid");
    let row = sqlx::query_as::<_, FormResponse>(&sql)
        .bind(response_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Delete a response by ID.
pub async fn delete_response(pool: &PgPool, response_id: &str) -> Result<bool, FormsError> {
    let result = sqlx::query("DELETE FROM responses WHERE id = $1::uuid")
        .bind(response_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
