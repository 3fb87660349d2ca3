//! Shared application state.

use std::sync::Arc;

use notera_core::{NoteStore, UserStore};
use notera_db::Database;

use crate::services::{NoteService, UserService};

/// State shared across all handlers: the two domain services, each holding
/// its store as an explicit dependency.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub notes: NoteService,
}

impl AppState {
    /// Build state backed by the PostgreSQL repositories.
    pub fn new(db: Database) -> Self {
        Self::with_stores(Arc::new(db.users), Arc::new(db.notes))
    }

    /// Build state from arbitrary store implementations.
    pub fn with_stores(users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self {
            users: UserService::new(users),
            notes: NoteService::new(notes),
        }
    }
}
