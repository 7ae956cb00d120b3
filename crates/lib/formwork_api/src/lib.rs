//! # formwork_api
//!
//! HTTP API library for Formwork.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, forms, health, questions, responses, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `formwork_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    formwork_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
///
/// Only registration and login create identity; everything else sits
/// behind the auth middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/health", get(health::health_handler))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/session", get(auth::session_handler))
        .route("/users/{id}", get(users::get_user_handler))
        .route("/users/{id}", patch(users::update_user_handler))
        .route("/users/{id}", delete(users::delete_user_handler))
        .route("/forms", post(forms::create_form_handler))
        .route("/forms", get(forms::list_forms_handler))
        .route("/forms/{id}", get(forms::get_form_handler))
        .route("/forms/{id}", patch(forms::update_form_handler))
        .route("/forms/{id}", delete(forms::delete_form_handler))
        .route(
            "/forms/{id}/questions",
            post(questions::create_question_handler),
        )
        .route(
            "/forms/{id}/questions",
            get(questions::list_questions_handler),
        )
        .route("/questions/{id}", patch(questions::update_question_handler))
        .route(
            "/questions/{id}",
            delete(questions::delete_question_handler),
        )
        .route(
            "/forms/{id}/responses",
            post(responses::submit_response_handler),
        )
        .route(
            "/forms/{id}/responses",
            get(responses::list_responses_handler),
        )
        .route(
            "/responses/{id}",
            delete(responses::delete_response_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
