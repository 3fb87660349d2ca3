//! HTTP handlers, split by resource.

pub mod notes;
pub mod users;

use axum::response::IntoResponse;
use axum::Json;

/// Plain-text liveness banner.
pub async fn root() -> &'static str {
    "notera"
}

/// Health check endpoint for load balancers and monitoring.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "notera-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
