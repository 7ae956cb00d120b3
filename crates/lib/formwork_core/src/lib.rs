//! # formwork_core
//!
//! Core domain logic for Formwork.

pub mod auth;
pub mod db;
pub mod forms;
pub mod migrate;
pub mod models;
pub mod users;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
