//! # notera-crypto
//!
//! Credential primitives for notera: one-way password hashing with Argon2id
//! and opaque session token generation.

pub mod error;
pub mod password;
pub mod token;

pub use error::{CryptoError, CryptoResult};
pub use password::{hash_password, verify_password};
pub use token::generate_session_token;
