//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    LoginRequest, LogoutResponse, RegisterRequest, SessionResponse, UserInfo,
};
use crate::services::auth;

/// Pull the bearer token back out of the headers.
///
/// Logout acts on the presented token itself, so the handler needs the raw
/// value and not just the identity the middleware resolved from it.
fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(AppError::unauthenticated)
}

/// `POST /auth/register` — create a new user account and first session.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<SessionResponse>> {
    let resp = auth::register(
        &state.pool,
        &body.email,
        &body.password,
        body.name.as_deref(),
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let resp = auth::login(
        &state.pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `POST /auth/logout` — revoke the presented session token.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<LogoutResponse>> {
    let token = bearer_token(&headers)?;
    let resp = auth::logout(&state.pool, token, state.config.jwt_secret.as_bytes()).await?;
    Ok(Json(resp))
}

/// `GET /auth/session` — resolve the presented token to its user profile.
pub async fn session_handler(
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<UserInfo>> {
    Ok(Json(user.0.into()))
}
