//! One-way password hashing using Argon2id.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::{CryptoError, CryptoResult};

/// Hash a password with Argon2id and a fresh random salt.
///
/// Returns a self-describing PHC string suitable for opaque storage;
/// parameters travel inside the string so they can be tuned later without
/// invalidating existing hashes.
pub fn hash_password(password: &str) -> CryptoResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// A malformed stored hash is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> CryptoResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| CryptoError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("test123").unwrap();
        assert!(verify_password("test123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("test123").unwrap();
        assert!(!verify_password("salah123", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("test123").unwrap();
        let b = hash_password("test123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("supersecretpw").unwrap();
        assert!(!hash.contains("supersecretpw"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        assert!(verify_password("test123", "not-a-phc-string").is_err());
    }
}
