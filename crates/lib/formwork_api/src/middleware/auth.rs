//! Authentication middleware — the per-request access gate.
//!
//! Every route except register and login passes through [`require_auth`]:
//! bearer extraction, token verification, session-store liveness, user
//! resolution. Any miss yields the same rejection — a caller cannot tell a
//! missing token from a malformed, expired, or revoked one.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use formwork_core::models::auth::User;

use crate::AppState;
use crate::error::AppError;
use crate::services::auth;

/// Key used to store the resolved identity in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Axum middleware: extracts `Authorization: Bearer <token>`, runs the full
/// session validation, and injects [`AuthenticatedUser`] into request
/// extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(AppError::unauthenticated)?;

    let user = auth::validate(&state.pool, token, state.config.jwt_secret.as_bytes()).await?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}

/// Self-only access check for user-record operations.
///
/// There is no admin role; acting on another user's record is always
/// rejected.
pub fn ensure_self(identity: &AuthenticatedUser, target_user_id: &str) -> Result<(), AppError> {
    if identity.0.id == target_user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Cannot act on another user's record".into(),
        ))
    }
}
