//! Question queries.

use sqlx::PgPool;

use super::FormsError;
use crate::models::forms::Question;
use crate::uuid::uuidv7;

const QUESTION_COLUMNS: &str = "id::text AS id, form_id::text AS form_id, prompt, kind, \
                                options, required, position, created_at, updated_at";

/// Create a question under a form.
pub async fn create_question(
    pool: &PgPool,
    form_id: &str,
    prompt: &str,
    kind: &str,
    options: Option<&serde_json::Value>,
    required: bool,
    position: i32,
) -> Result<Question, FormsError> {
    let sql = format!(
        "INSERT INTO questions (id, form_id, prompt, kind, options, required, position) \
         VALUES ($1, $2::uuid, $3, $4, $5, $6, $7) \
         RETURNING {QUESTION_COLUMNS}"
    );
    let question = sqlx::query_as::<_, Question>(&sql)
        .bind(uuidv7())
        .bind(form_id)
        .bind(prompt)
        .bind(kind)
        .bind(options)
        .bind(required)
        .bind(position)
        .fetch_one(pool)
        .await?;
    Ok(question)
}

/// List a form's questions in display order.
pub async fn list_questions(pool: &PgPool, form_id: &str) -> Result<Vec<Question>, FormsError> {
    let sql = format!(
        "SELECT {QUESTION_COLUMNS} FROM questions \
         WHERE form_id = $1::uuid ORDER BY position, created_at"
    );
    let rows = sqlx::query_as::<_, Question>(&sql)
        .bind(form_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch a question by ID.
pub async fn get_question(
    pool: &PgPool,
    question_id: &str,
) -> Result<Option<Question>, FormsError> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1::uuid");
    let row = sqlx::query_as::<_, Question>(&sql)
        .bind(question_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Update a question. `None` fields keep their current value.
pub async fn update_question(
    pool: &PgPool,
    question_id: &str,
    prompt: Option<&str>,
    kind: Option<&str>,
    options: Option<&serde_json::Value>,
    required: Option<bool>,
    position: Option<i32>,
) -> Result<Question, FormsError> {
    let sql = format!(
        r#"
        UPDATE questions SET
            prompt = COALESCE($2, prompt),
            kind = COALESCE($3, kind),
            options = COALESCE($4, options),
            required = COALESCE($5, required),
            position = COALESCE($6, position),
            updated_at = now()
        WHERE id = $1::uuid
        RETURNING {QUESTION_COLUMNS}
        "#
    );
    let question = sqlx::query_as::<_, Question>(&sql)
        .bind(question_id)
        .bind(prompt)
        .bind(kind)
        .bind(options)
        .bind(required)
        .bind(position)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| FormsError::NotFound(format!("Question {question_id} not found")))?;
    Ok(question)
}

/// Delete a question by ID.
pub async fn delete_question(pool: &PgPool, question_id: &str) -> Result<bool, FormsError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1::uuid")
        .bind(question_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
