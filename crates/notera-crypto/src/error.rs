//! Error types for notera-crypto.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Errors from password hashing and verification.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Hashing or hash parsing failed
    #[error("Password hash error: {0}")]
    Hash(String),
}
