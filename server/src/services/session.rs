//! In-memory session store.
//!
//! DESIGN
//! ======
//! Clients hold a random 32-byte hex token in an HttpOnly cookie. The store
//! keeps only the SHA-256 digest of each token with its expiry, so a dump of
//! server memory does not yield usable cookies. Sessions do not survive a
//! restart; signing in again is cheap for an access-token deployment.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

/// Lifetime of a session and of its cookie.
pub const SESSION_TTL: Duration = Duration::days(7);

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

pub(crate) fn token_digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Live sessions keyed by token digest. Cheap to clone.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<[u8; 32], OffsetDateTime>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its token.
    pub async fn create(&self) -> String {
        self.create_at(OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn create_at(&self, now: OffsetDateTime) -> String {
        let token = generate_token();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(token_digest(&token), now + SESSION_TTL);
        token
    }

    /// Whether `token` names a live session.
    pub async fn validate(&self, token: &str) -> bool {
        self.validate_at(token, OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn validate_at(&self, token: &str, now: OffsetDateTime) -> bool {
        if token.is_empty() {
            return false;
        }
        let sessions = self.sessions.read().await;
        sessions
            .get(&token_digest(token))
            .is_some_and(|expires_at| *expires_at > now)
    }

    /// Drop the session for `token`. Returns whether one existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&token_digest(token)).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
