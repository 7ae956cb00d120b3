//! User record management.
//!
//! Auth-path lookups (login, session enrichment) live in
//! [`crate::auth::queries`]; this module covers the user CRUD surface.

pub mod queries;

use thiserror::Error;

/// User management errors.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
