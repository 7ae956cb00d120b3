//! Request handlers.

pub mod auth;
pub mod forms;
pub mod health;
pub mod questions;
pub mod responses;
pub mod users;
