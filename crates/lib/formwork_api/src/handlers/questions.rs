//! Question request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    CreateQuestionRequest, QuestionInfo, QuestionListResponse, UpdateQuestionRequest,
};
use crate::services::forms;

/// `POST /forms/{id}/questions` — add a question to a form (owner-only).
pub async fn create_question_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(form_id): Path<String>,
    Json(body): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<QuestionInfo>)> {
    let question = forms::create_question(&state.pool, &identity, &form_id, &body).await?;
    Ok((StatusCode::CREATED, Json(question.into())))
}

/// `GET /forms/{id}/questions` — list a form's questions in display order.
pub async fn list_questions_handler(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
) -> AppResult<Json<QuestionListResponse>> {
    let questions = forms::list_questions(&state.pool, &form_id).await?;
    Ok(Json(QuestionListResponse {
        questions: questions.into_iter().map(Into::into).collect(),
    }))
}

/// `PATCH /questions/{id}` — update a question (form-owner-only).
pub async fn update_question_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(question_id): Path<String>,
    Json(body): Json<UpdateQuestionRequest>,
) -> AppResult<Json<QuestionInfo>> {
    let question = forms::update_question(&state.pool, &identity, &question_id, &body).await?;
    Ok(Json(question.into()))
}

/// `DELETE /questions/{id}` — delete a question (form-owner-only).
pub async fn delete_question_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(question_id): Path<String>,
) -> AppResult<StatusCode> {
    forms::delete_question(&state.pool, &identity, &question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
