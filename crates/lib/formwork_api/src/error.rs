//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// The one message every authentication failure surfaces.
///
/// Missing, malformed, expired, and revoked tokens must be externally
/// indistinguishable; callers only learn that they are not authenticated.
const UNAUTHENTICATED_MESSAGE: &str = "Authentication required";

/// The one message every failed login surfaces, whether the email was
/// unknown or the password wrong.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// The collapsed rejection for any request that fails authentication.
    pub fn unauthenticated() -> Self {
        AppError::Unauthorized(UNAUTHENTICATED_MESSAGE.into())
    }

    /// The collapsed rejection for any failed login attempt.
    pub fn invalid_credentials() -> Self {
        AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.as_str()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<formwork_core::auth::AuthError> for AppError {
    fn from(e: formwork_core::auth::AuthError) -> Self {
        use formwork_core::auth::AuthError;
        match e {
            AuthError::CredentialError => AppError::invalid_credentials(),
            AuthError::TokenError(_) => AppError::unauthenticated(),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<formwork_core::users::UsersError> for AppError {
    fn from(e: formwork_core::users::UsersError) -> Self {
        use formwork_core::users::UsersError;
        match e {
            UsersError::NotFound(msg) => AppError::NotFound(msg),
            UsersError::Validation(msg) => AppError::Validation(msg),
            UsersError::DbError(e) => AppError::from(e),
        }
    }
}

impl From<formwork_core::forms::FormsError> for AppError {
    fn from(e: formwork_core::forms::FormsError) -> Self {
        use formwork_core::forms::FormsError;
        match e {
            FormsError::NotFound(msg) => AppError::NotFound(msg),
            FormsError::Forbidden(msg) => AppError::Forbidden(msg),
            FormsError::Validation(msg) => AppError::Validation(msg),
            FormsError::DbError(e) => AppError::from(e),
        }
    }
}
