//! User endpoints: register, login, current-profile, update, logout.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use notera_core::{LoginUserRequest, RegisterUserRequest, UpdateUserRequest};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/users` — register a new user. Public.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.users.register(req).await?;
    Ok(Json(json!({ "data": response })))
}

/// `POST /api/users/login` — exchange credentials for a session token. Public.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.users.login(req).await?;
    Ok(Json(json!({ "data": response })))
}

/// `GET /api/users/current` — profile of the authenticated user.
pub async fn current(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.users.current(&auth.user);
    Ok(Json(json!({ "data": response })))
}

/// `PATCH /api/users/current` — partial profile update.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.users.update(&auth.user, req).await?;
    Ok(Json(json!({ "data": response })))
}

/// `DELETE /api/users/current` — revoke the session token.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.users.logout(&auth.user).await?;
    Ok(Json(json!({ "data": response })))
}
