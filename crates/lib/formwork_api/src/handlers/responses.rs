//! Response request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{ResponseInfo, ResponseListResponse, SubmitResponseRequest};
use crate::services::forms;

/// `POST /forms/{id}/responses` — submit a response to a form.
pub async fn submit_response_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(form_id): Path<String>,
    Json(body): Json<SubmitResponseRequest>,
) -> AppResult<(StatusCode, Json<ResponseInfo>)> {
    let response = forms::submit_response(&state.pool, &identity, &form_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response.into())))
}

/// `GET /forms/{id}/responses` — list a form's responses (owner-only).
pub async fn list_responses_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(form_id): Path<String>,
) -> AppResult<Json<ResponseListResponse>> {
    let responses = forms::list_responses(&state.pool, &identity, &form_id).await?;
    Ok(Json(ResponseListResponse {
        responses: responses.into_iter().map(Into::into).collect(),
    }))
}

/// `DELETE /responses/{id}` — delete a response (form-owner-only).
pub async fn delete_response_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(response_id): Path<String>,
) -> AppResult<StatusCode> {
    forms::delete_response(&state.pool, &identity, &response_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
