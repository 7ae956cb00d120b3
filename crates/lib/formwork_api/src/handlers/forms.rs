//! Form request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreateFormRequest, FormInfo, FormListResponse, UpdateFormRequest};
use crate::services::forms;

/// `POST /forms` — create a form owned by the caller.
pub async fn create_form_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreateFormRequest>,
) -> AppResult<(StatusCode, Json<FormInfo>)> {
    let form = forms::create_form(&state.pool, &identity, &body).await?;
    Ok((StatusCode::CREATED, Json(form.into())))
}

/// `GET /forms` — list the caller's forms.
pub async fn list_forms_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<FormListResponse>> {
    let forms = forms::list_forms(&state.pool, &identity).await?;
    Ok(Json(FormListResponse {
        forms: forms.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /forms/{id}` — fetch a form.
pub async fn get_form_handler(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
) -> AppResult<Json<FormInfo>> {
    let form = forms::get_form(&state.pool, &form_id).await?;
    Ok(Json(form.into()))
}

/// `PATCH /forms/{id}` — update a form (owner-only).
pub async fn update_form_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(form_id): Path<String>,
    Json(body): Json<UpdateFormRequest>,
) -> AppResult<Json<FormInfo>> {
    let form = forms::update_form(&state.pool, &identity, &form_id, &body).await?;
    Ok(Json(form.into()))
}

/// `DELETE /forms/{id}` — delete a form (owner-only).
pub async fn delete_form_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(form_id): Path<String>,
) -> AppResult<StatusCode> {
    forms::delete_form(&state.pool, &identity, &form_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
