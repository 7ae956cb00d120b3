//! Form registry logic.
//!
//! Database queries for forms and their child records (questions,
//! responses). Ownership rules are enforced at the service layer; queries
//! here are plain keyed-record storage.

pub mod queries;
pub mod questions;
pub mod responses;

use thiserror::Error;

/// Form registry errors.
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
