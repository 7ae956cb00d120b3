//! Form, question, and response domain models.

use serde::{Deserialize, Serialize};

/// A form owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Form {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A question belonging to a form.
///
/// `kind` is a free-form discriminator (`text`, `multiple_choice`, ...);
/// `options` holds choice labels for choice kinds, null otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: String,
    pub form_id: String,
    pub prompt: String,
    pub kind: String,
    pub options: Option<serde_json::Value>,
    pub required: bool,
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A submitted response to a form.
///
/// `answers` maps question ids to submitted values.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub respondent_id: String,
    pub answers: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
