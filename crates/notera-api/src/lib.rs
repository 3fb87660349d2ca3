//! # notera-api
//!
//! HTTP surface for the notera note-taking backend.
//!
//! The router translates requests to and from the domain services; all
//! business rules (validation, ownership scoping, slug derivation,
//! pagination) live in the services and `notera-core`. Protected routes
//! authenticate with the [`auth::AuthUser`] extractor.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;
pub mod test_support;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Users
        .route("/api/users", post(handlers::users::register))
        .route("/api/users/login", post(handlers::users::login))
        .route(
            "/api/users/current",
            get(handlers::users::current)
                .patch(handlers::users::update)
                .delete(handlers::users::logout),
        )
        // Notes
        .route(
            "/api/notes",
            post(handlers::notes::create).get(handlers::notes::search),
        )
        .route(
            "/api/notes/:id",
            get(handlers::notes::get)
                .put(handlers::notes::update)
                .delete(handlers::notes::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
