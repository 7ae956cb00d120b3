//! User record request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{UpdateUserRequest, UserInfo};
use crate::services::users;

/// `GET /users/{id}` — fetch a user record (self-only).
pub async fn get_user_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserInfo>> {
    let user = users::get_user(&state.pool, &identity, &user_id).await?;
    Ok(Json(user.into()))
}

/// `PATCH /users/{id}` — update a user record (self-only).
pub async fn update_user_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> AppResult<Json<UserInfo>> {
    let user = users::update_user(&state.pool, &identity, &user_id, &body).await?;
    Ok(Json(user.into()))
}

/// `DELETE /users/{id}` — delete a user record (self-only).
pub async fn delete_user_handler(
    State(state): State<AppState>,
    axum::Extension(identity): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
) -> AppResult<StatusCode> {
    users::delete_user(&state.pool, &identity, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
