//! Form, question, and response operations with ownership enforcement.
//!
//! Reading a form and its questions, and submitting a response, are open to
//! any authenticated user. Mutating a form or its questions, and reading
//! its responses, are owner-only. Ownership is resolved server-side from
//! the store, never from request fields.

use sqlx::PgPool;

use formwork_core::forms::{queries, questions, responses};
use formwork_core::models::forms::{Form, FormResponse, Question};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    CreateFormRequest, CreateQuestionRequest, SubmitResponseRequest, UpdateFormRequest,
    UpdateQuestionRequest,
};

/// Fetch a form or 404.
async fn get_form_or_404(pool: &PgPool, form_id: &str) -> AppResult<Form> {
    queries::get_form(pool, form_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Form {form_id} not found")))
}

/// Fetch a form and require the caller to own it.
async fn get_owned_form(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
) -> AppResult<Form> {
    let form = get_form_or_404(pool, form_id).await?;
    if form.owner_id != identity.0.id {
        return Err(AppError::Forbidden(
            "Cannot act on another user's form".into(),
        ));
    }
    Ok(form)
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

pub async fn create_form(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    req: &CreateFormRequest,
) -> AppResult<Form> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    let form =
        queries::create_form(pool, &identity.0.id, &req.title, req.description.as_deref()).await?;
    Ok(form)
}

pub async fn list_forms(pool: &PgPool, identity: &AuthenticatedUser) -> AppResult<Vec<Form>> {
    Ok(queries::list_forms_for_owner(pool, &identity.0.id).await?)
}

pub async fn get_form(pool: &PgPool, form_id: &str) -> AppResult<Form> {
    get_form_or_404(pool, form_id).await
}

pub async fn update_form(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
    req: &UpdateFormRequest,
) -> AppResult<Form> {
    get_owned_form(pool, identity, form_id).await?;
    if let Some(title) = req.title.as_deref()
        && title.trim().is_empty()
    {
        return Err(AppError::Validation("Title cannot be empty".into()));
    }
    let form =
        queries::update_form(pool, form_id, req.title.as_deref(), req.description.as_deref())
            .await?;
    Ok(form)
}

pub async fn delete_form(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
) -> AppResult<()> {
    get_owned_form(pool, identity, form_id).await?;
    queries::delete_form(pool, form_id).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

pub async fn create_question(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
    req: &CreateQuestionRequest,
) -> AppResult<Question> {
    get_owned_form(pool, identity, form_id).await?;
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".into()));
    }
    let question = questions::create_question(
        pool,
        form_id,
        &req.prompt,
        req.kind.as_deref().unwrap_or("text"),
        req.options.as_ref(),
        req.required.unwrap_or(false),
        req.position.unwrap_or(0),
    )
    .await?;
    Ok(question)
}

pub async fn list_questions(pool: &PgPool, form_id: &str) -> AppResult<Vec<Question>> {
    get_form_or_404(pool, form_id).await?;
    Ok(questions::list_questions(pool, form_id).await?)
}

pub async fn update_question(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    question_id: &str,
    req: &UpdateQuestionRequest,
) -> AppResult<Question> {
    let question = questions::get_question(pool, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {question_id} not found")))?;
    get_owned_form(pool, identity, &question.form_id).await?;

    let question = questions::update_question(
        pool,
        question_id,
        req.prompt.as_deref(),
        req.kind.as_deref(),
        req.options.as_ref(),
        req.required,
        req.position,
    )
    .await?;
    Ok(question)
}

pub async fn delete_question(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    question_id: &str,
) -> AppResult<()> {
    let question = questions::get_question(pool, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {question_id} not found")))?;
    get_owned_form(pool, identity, &question.form_id).await?;
    questions::delete_question(pool, question_id).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn submit_response(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
    req: &SubmitResponseRequest,
) -> AppResult<FormResponse> {
    get_form_or_404(pool, form_id).await?;
    if !req.answers.is_object() {
        return Err(AppError::Validation(
            "Answers must be an object keyed by question id".into(),
        ));
    }
    let response = responses::create_response(pool, form_id, &identity.0.id, &req.answers).await?;
    Ok(response)
}

pub async fn list_responses(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    form_id: &str,
) -> AppResult<Vec<FormResponse>> {
    get_owned_form(pool, identity, form_id).await?;
    Ok(responses::list_responses(pool, form_id).await?)
}

pub async fn delete_response(
    pool: &PgPool,
    identity: &AuthenticatedUser,
    response_id: &str,
) -> AppResult<()> {
    let response = responses::get_response(pool, response_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Response {response_id} not found")))?;
    get_owned_form(pool, identity, &response.form_id).await?;
    responses::delete_response(pool, response_id).await?;
    Ok(())
}
