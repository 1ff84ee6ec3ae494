//! Nonce helper.
//!
//! The gateway only requires that `nonce_str` be unique per request and at most
//! 32 characters. Nothing in this workspace calls this implicitly: callers pick
//! their own nonce strategy and may use this one.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Longest nonce the gateway accepts.
pub const MAX_NONCE_LEN: usize = 32;

/// Generate a random 32-character alphanumeric nonce.
pub fn generate_nonce() -> String {
    generate_nonce_with_len(MAX_NONCE_LEN)
}

/// Generate a random alphanumeric nonce of `len` characters, capped at
/// [`MAX_NONCE_LEN`].
pub fn generate_nonce_with_len(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len.min(MAX_NONCE_LEN))
        .map(char::from)
        .collect()
}
