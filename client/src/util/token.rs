//! Bearer token persistence.
//!
//! The backend issues a token at login; every later request carries it as
//! `Authorization: Bearer <token>` until logout or a 401/403 on `/me/`.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::storage;

const TOKEN_KEY: &str = "token";

pub fn get_token() -> Option<String> {
    storage::load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn set_token(token: &str) {
    storage::save_string(TOKEN_KEY, token.trim());
}

pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
