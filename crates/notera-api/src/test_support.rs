//! In-memory store implementations for tests.
//!
//! Always compiled so integration tests (in tests/) can build an
//! [`AppState`](crate::state::AppState) without a running PostgreSQL.
//! Behavior mirrors the SQL repositories: ownership scoping, conditional
//! update/delete by affected rows, id-ordered case-sensitive substring
//! search.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use notera_core::{Error, NewNote, Note, NoteStore, Result, User, UserStore};

use crate::state::AppState;

/// In-memory credential store keyed by username.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<BTreeMap<String, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(Error::Conflict(format!(
                "Username {} is already taken",
                user.username
            )));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.session_token.as_deref() == Some(token))
            .cloned())
    }

    async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::NotFound(format!("User {username} not found")))?;
        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash.to_string();
        }
        Ok(user.clone())
    }

    async fn set_token(&self, username: &str, token: Option<&str>) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::NotFound(format!("User {username} not found")))?;
        user.session_token = token.map(String::from);
        Ok(())
    }
}

/// In-memory note store with monotonically assigned ids.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: Mutex<BTreeMap<i64, Note>>,
    next_id: AtomicI64,
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, note: &NewNote) -> Result<Note> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let note = Note {
            id,
            owner_username: note.owner_username.clone(),
            title: note.title.clone(),
            slug: note.slug.clone(),
            description: note.description.clone(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        };
        self.notes.lock().unwrap().insert(id, note.clone());
        Ok(note)
    }

    async fn find_owned(&self, owner: &str, id: i64) -> Result<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .get(&id)
            .filter(|n| n.owner_username == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        owner: &str,
        id: i64,
        title: &str,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>> {
        let mut notes = self.notes.lock().unwrap();
        match notes.get_mut(&id).filter(|n| n.owner_username == owner) {
            Some(note) => {
                note.title = title.to_string();
                note.description = description.to_string();
                note.updated_at = updated_at;
                Ok(Some(note.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_owned(&self, owner: &str, id: i64) -> Result<bool> {
        let mut notes = self.notes.lock().unwrap();
        match notes.get(&id) {
            Some(note) if note.owner_username == owner => {
                notes.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn search(
        &self,
        owner: &str,
        title: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Note>, i64)> {
        let notes = self.notes.lock().unwrap();
        // BTreeMap iteration is id-ordered, matching the SQL ORDER BY id.
        let matching: Vec<Note> = notes
            .values()
            .filter(|n| n.owner_username == owner)
            .filter(|n| title.map_or(true, |t| n.title.contains(t)))
            .cloned()
            .collect();

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        Ok((page, total))
    }
}

/// Application state backed by fresh in-memory stores.
pub fn memory_state() -> AppState {
    AppState::with_stores(
        Arc::new(MemoryUserStore::default()),
        Arc::new(MemoryNoteStore::default()),
    )
}
