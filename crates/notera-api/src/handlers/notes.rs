//! Note endpoints: CRUD and paged search, all behind authentication.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use notera_core::{CreateNoteRequest, SearchNoteRequest, UpdateNoteRequest};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Parse a note id path segment, keeping the error body shape uniform.
fn parse_note_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Note id must be a number".to_string()))
}

/// `POST /api/notes` — create a note owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.notes.create(&auth.user, req).await?;
    Ok(Json(json!({ "data": response })))
}

/// `GET /api/notes/:id` — fetch one of the caller's notes.
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let note_id = parse_note_id(&id)?;
    let response = state.notes.get(&auth.user, note_id).await?;
    Ok(Json(json!({ "data": response })))
}

/// `PUT /api/notes/:id` — replace title/description. The path id wins over
/// any id in the body.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(mut req): Json<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.id = parse_note_id(&id)?;
    let response = state.notes.update(&auth.user, req).await?;
    Ok(Json(json!({ "data": response })))
}

/// `DELETE /api/notes/:id` — delete one of the caller's notes.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let note_id = parse_note_id(&id)?;
    let response = state.notes.delete(&auth.user, note_id).await?;
    Ok(Json(json!({ "data": response })))
}

/// Query parameters for `GET /api/notes`.
#[derive(Debug, Deserialize)]
pub struct SearchNoteQuery {
    title: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

/// `GET /api/notes?title=&page=&size=` — paged search over the caller's
/// notes. Page defaults to 1, size to 10.
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SearchNoteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let req = SearchNoteRequest {
        title: query.title,
        page: query.page.unwrap_or(1),
        size: query.size.unwrap_or(10),
    };
    let response = state.notes.search(&auth.user, req).await?;
    Ok(Json(response))
}
