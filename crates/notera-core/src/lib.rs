//! # notera-core
//!
//! Core types, traits, and abstractions for the notera note-taking backend.
//!
//! This crate provides the domain models, validation rules, slug derivation,
//! pagination math, and the store traits that the database and API crates
//! depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod slug;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use pagination::{total_pages, Pageable, Paging};
pub use slug::slugify;
pub use traits::{NoteStore, UserStore};
