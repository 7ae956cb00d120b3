//! Business logic between handlers and `formwork_core` queries.

pub mod auth;
pub mod forms;
pub mod users;
