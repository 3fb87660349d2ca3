//! Domain models and request/response shapes for notera.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ENTITIES
// =============================================================================

/// A registered user as stored in the credential store.
///
/// `password_hash` and `session_token` are internal; they never appear in a
/// response body. A `session_token` of `None` means the user is logged out.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub session_token: Option<String>,
}

/// A note as stored, including its owner.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub owner_username: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub owner_username: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// USER REQUESTS / RESPONSES
// =============================================================================

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Request body for `POST /api/users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUserRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `PATCH /api/users/current`. Omitted fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Public user profile. The token is present only in the login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    /// Project a user into its public profile, never exposing the token.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
            token: None,
        }
    }

    /// Project a user including the freshly issued session token.
    pub fn with_token(user: &User, token: String) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
            token: Some(token),
        }
    }
}

// =============================================================================
// NOTE REQUESTS / RESPONSES
// =============================================================================

/// Request body for `POST /api/notes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub description: String,
}

/// Request for `PUT /api/notes/:id`. The id always comes from the path;
/// any id in the body is overridden by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Request for `GET /api/notes` (offset pagination plus optional title filter).
#[derive(Debug, Clone)]
pub struct SearchNoteRequest {
    pub title: Option<String>,
    pub page: i64,
    pub size: i64,
}

/// Note projection returned by the API. The owner is deliberately excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            slug: note.slug,
            description: note.description,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}
