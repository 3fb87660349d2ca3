//! Store traits for notera's external persistence collaborators.
//!
//! These traits define the interfaces the concrete PostgreSQL layer must
//! satisfy, enabling pluggable backends and testability with in-memory
//! implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{NewNote, Note, User};

// =============================================================================
// USER STORE
// =============================================================================

/// Credential store for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `Conflict` if the username is taken.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Resolve a session token to its user, if any.
    ///
    /// This is the whole authentication contract: the bearer credential is
    /// compared to stored tokens by exact string equality.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>>;

    /// Partially update a profile; `None` fields are left unchanged.
    /// Returns the updated record.
    async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User>;

    /// Set (login) or clear (logout) the user's session token.
    async fn set_token(&self, username: &str, token: Option<&str>) -> Result<()>;
}

// =============================================================================
// NOTE STORE
// =============================================================================

/// Store for notes. Every operation is scoped to the owning username, so a
/// note under a different owner is indistinguishable from a missing one.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a new note and return it with its assigned id.
    async fn insert(&self, note: &NewNote) -> Result<Note>;

    /// Fetch a note by `(owner, id)`.
    async fn find_owned(&self, owner: &str, id: i64) -> Result<Option<Note>>;

    /// Conditionally update title/description/updated_at by `(owner, id)`.
    ///
    /// Returns `None` when no row matched, which covers both a missing note
    /// and a concurrent delete between check and mutate.
    async fn update_owned(
        &self,
        owner: &str,
        id: i64,
        title: &str,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>>;

    /// Delete by `(owner, id)`; returns whether a row was removed.
    async fn delete_owned(&self, owner: &str, id: i64) -> Result<bool>;

    /// Page through an owner's notes, optionally filtered by title substring.
    ///
    /// Returns the page of notes ordered by id plus the total match count
    /// ignoring limit/offset.
    async fn search(
        &self,
        owner: &str,
        title: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Note>, i64)>;
}
