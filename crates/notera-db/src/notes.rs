//! Note repository implementation.
//!
//! Every query filters by `(owner_username, id)` or `owner_username`, so
//! ownership scoping is enforced at the SQL level. Update and delete are
//! single conditional statements whose affected-row count distinguishes
//! success from a missing (or concurrently removed) note.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use notera_core::{Error, NewNote, Note, NoteStore, Result};

use crate::escape_like;

const NOTE_COLUMNS: &str = "id, owner_username, title, slug, description, created_at, updated_at";

/// PostgreSQL implementation of the note store.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteRepository {
    async fn insert(&self, note: &NewNote) -> Result<Note> {
        let query = format!(
            "INSERT INTO notes (owner_username, title, slug, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {NOTE_COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(&note.owner_username)
            .bind(&note.title)
            .bind(&note.slug)
            .bind(&note.description)
            .bind(note.created_at)
            .bind(note.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(note)
    }

    async fn find_owned(&self, owner: &str, id: i64) -> Result<Option<Note>> {
        let query =
            format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1 AND owner_username = $2");
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(note)
    }

    async fn update_owned(
        &self,
        owner: &str,
        id: i64,
        title: &str,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>> {
        // Zero rows means absent, not owned, or concurrently deleted; the
        // caller maps all three to NotFound.
        let query = format!(
            "UPDATE notes SET title = $3, description = $4, updated_at = $5
             WHERE id = $1 AND owner_username = $2
             RETURNING {NOTE_COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner)
            .bind(title)
            .bind(description)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(note)
    }

    async fn delete_owned(&self, owner: &str, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_username = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        owner: &str,
        title: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Note>, i64)> {
        // Title filtering is a LIKE substring match; case sensitivity
        // follows the store's default collation.
        let pattern = title.map(|t| format!("%{}%", escape_like(t)));

        let (notes, total) = match &pattern {
            Some(pattern) => {
                let query = format!(
                    "SELECT {NOTE_COLUMNS} FROM notes
                     WHERE owner_username = $1 AND title LIKE $2 ESCAPE '\\'
                     ORDER BY id
                     LIMIT $3 OFFSET $4"
                );
                let notes = sqlx::query_as::<_, Note>(&query)
                    .bind(owner)
                    .bind(pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(Error::Database)?;

                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM notes
                     WHERE owner_username = $1 AND title LIKE $2 ESCAPE '\\'",
                )
                .bind(owner)
                .bind(pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;

                (notes, total)
            }
            None => {
                let query = format!(
                    "SELECT {NOTE_COLUMNS} FROM notes
                     WHERE owner_username = $1
                     ORDER BY id
                     LIMIT $2 OFFSET $3"
                );
                let notes = sqlx::query_as::<_, Note>(&query)
                    .bind(owner)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(Error::Database)?;

                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE owner_username = $1")
                        .bind(owner)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(Error::Database)?;

                (notes, total)
            }
        };

        Ok((notes, total))
    }
}
