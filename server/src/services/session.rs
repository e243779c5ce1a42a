//! In-memory session table.
//!
//! ARCHITECTURE
//! ============
//! Sessions are created after the backend accepts a user's credentials and
//! are looked up by the token stored in the `console_session` cookie. The
//! table lives for the process lifetime; a restart signs everyone out.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use client::net::types::SessionUser;
use rand::Rng;
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Shared token -> user map. Clones share the same table.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionUser>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `user`, returning its token.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        self.sessions.write().await.insert(token.clone(), user);
        token
    }

    pub async fn get(&self, token: &str) -> Option<SessionUser> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Remove a session; returns whether it existed.
    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
