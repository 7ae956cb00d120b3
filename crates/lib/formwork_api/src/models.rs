//! API request/response models.
//!
//! Wire-facing structs with camelCase field names, kept separate from the
//! domain models in `formwork_core::models`.

use formwork_core::models::auth::User;
use formwork_core::models::forms::{Form, FormResponse, Question};
use serde::{Deserialize, Serialize};

/// Error body returned by every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued session credential.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Authenticated user profile (also the ValidateSession payload).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserInfo {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFormRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInfo {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Form> for FormInfo {
    fn from(f: Form) -> Self {
        Self {
            id: f.id,
            owner_id: f.owner_id,
            title: f.title,
            description: f.description,
            created_at: f.created_at.to_rfc3339(),
            updated_at: f.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormListResponse {
    pub forms: Vec<FormInfo>,
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub prompt: String,
    pub kind: Option<String>,
    pub options: Option<serde_json::Value>,
    pub required: Option<bool>,
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub prompt: Option<String>,
    pub kind: Option<String>,
    pub options: Option<serde_json::Value>,
    pub required: Option<bool>,
    pub position: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    pub id: String,
    pub form_id: String,
    pub prompt: String,
    pub kind: String,
    pub options: Option<serde_json::Value>,
    pub required: bool,
    pub position: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Question> for QuestionInfo {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            form_id: q.form_id,
            prompt: q.prompt,
            kind: q.kind,
            options: q.options,
            required: q.required,
            position: q.position,
            created_at: q.created_at.to_rfc3339(),
            updated_at: q.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionInfo>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    pub answers: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    pub id: String,
    pub form_id: String,
    pub respondent_id: String,
    pub answers: serde_json::Value,
    pub created_at: String,
}

impl From<FormResponse> for ResponseInfo {
    fn from(r: FormResponse) -> Self {
        Self {
            id: r.id,
            form_id: r.form_id,
            respondent_id: r.respondent_id,
            answers: r.answers,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseListResponse {
    pub responses: Vec<ResponseInfo>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub db_connected: bool,
    pub version: String,
}
