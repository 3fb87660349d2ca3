//! Note domain service: CRUD and paged search, scoped to the owner.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use notera_core::pagination::{offset, total_pages, Pageable, Paging};
use notera_core::validation;
use notera_core::{
    slugify, CreateNoteRequest, Error, NewNote, Note, NoteResponse, NoteStore, Result,
    SearchNoteRequest, UpdateNoteRequest, User,
};

/// One message for both "does not exist" and "owned by someone else", so
/// existence never leaks to non-owners.
const NOTE_NOT_FOUND: &str = "Note not found";

/// Stateless note service holding the note store as an explicit dependency.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Create a note owned by `user`, deriving the slug from the title.
    pub async fn create(&self, user: &User, req: CreateNoteRequest) -> Result<NoteResponse> {
        validation::validate_create_note(&req)?;

        let now = Utc::now();
        let note = self
            .store
            .insert(&NewNote {
                owner_username: user.username.clone(),
                slug: slugify(&req.title),
                title: req.title,
                description: req.description,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(
            subsystem = "api",
            component = "note_service",
            op = "create",
            username = %user.username,
            note_id = note.id,
            "Note created"
        );
        Ok(note.into())
    }

    /// Look up a note by `(owner, id)`; a note under a different owner is
    /// indistinguishable from a missing one.
    async fn must_exist(&self, user: &User, note_id: i64) -> Result<Note> {
        self.store
            .find_owned(&user.username, note_id)
            .await?
            .ok_or_else(|| Error::NotFound(NOTE_NOT_FOUND.to_string()))
    }

    /// Fetch one of the user's notes.
    pub async fn get(&self, user: &User, note_id: i64) -> Result<NoteResponse> {
        validation::validate_note_id(note_id)?;
        let note = self.must_exist(user, note_id).await?;
        Ok(note.into())
    }

    /// Update title and description, refreshing `updated_at`.
    ///
    /// The id and owner are immutable; the slug keeps its creation-time
    /// value. The store call is a single conditional update, so a note
    /// deleted between validation and write surfaces as NotFound rather
    /// than a silent success.
    pub async fn update(&self, user: &User, req: UpdateNoteRequest) -> Result<NoteResponse> {
        validation::validate_update_note(&req)?;

        let note = self
            .store
            .update_owned(
                &user.username,
                req.id,
                &req.title,
                &req.description,
                Utc::now(),
            )
            .await?
            .ok_or_else(|| Error::NotFound(NOTE_NOT_FOUND.to_string()))?;

        debug!(
            subsystem = "api",
            component = "note_service",
            op = "update",
            username = %user.username,
            note_id = note.id,
            "Note updated"
        );
        Ok(note.into())
    }

    /// Delete one of the user's notes. A raced or foreign delete is
    /// NotFound, never a silent success.
    pub async fn delete(&self, user: &User, note_id: i64) -> Result<bool> {
        validation::validate_note_id(note_id)?;

        let removed = self.store.delete_owned(&user.username, note_id).await?;
        if !removed {
            return Err(Error::NotFound(NOTE_NOT_FOUND.to_string()));
        }

        info!(
            subsystem = "api",
            component = "note_service",
            op = "delete",
            username = %user.username,
            note_id,
            "Note deleted"
        );
        Ok(true)
    }

    /// Page through the user's notes with an optional title substring filter.
    pub async fn search(
        &self,
        user: &User,
        req: SearchNoteRequest,
    ) -> Result<Pageable<NoteResponse>> {
        validation::validate_search(&req)?;

        let (notes, total) = self
            .store
            .search(
                &user.username,
                req.title.as_deref(),
                req.size,
                offset(req.page, req.size),
            )
            .await?;

        debug!(
            subsystem = "api",
            component = "note_service",
            op = "search",
            username = %user.username,
            result_count = notes.len(),
            "Search complete"
        );
        Ok(Pageable {
            data: notes.into_iter().map(NoteResponse::from).collect(),
            paging: Paging {
                current_page: req.page,
                size: req.size,
                total_page: total_pages(total, req.size),
            },
        })
    }
}
