//! Opaque session token generation.

use rand::Rng;

/// Length of generated session tokens.
pub const SESSION_TOKEN_LENGTH: usize = 48;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a cryptographically secure random string.
fn generate_secret(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a fresh opaque session token.
///
/// The token is a bearer credential compared to the stored value by exact
/// string equality; it carries no structure and no embedded claims.
pub fn generate_session_token() -> String {
    generate_secret(SESSION_TOKEN_LENGTH)
}
