//! Route-level decision layer.
//!
//! ARCHITECTURE
//! ============
//! `app_router` gates on auth state and mounts one of two surfaces:
//! `authenticated` (alerts, anomalies, configuration, general pages) or
//! `unauthenticated` (sign-in only). Decisions are plain functions over
//! `Location` snapshots so components only translate them into views.

pub mod app_router;
pub mod authenticated;
pub mod unauthenticated;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LOCATION_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of one navigation. Two visits to the same path get distinct keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocationKey(u64);

impl LocationKey {
    fn next() -> Self {
        Self(NEXT_LOCATION_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// Immutable snapshot of the browser location for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    search: String,
    key: LocationKey,
}

impl Location {
    /// Snapshot a new navigation to `pathname` with query `search`.
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self { pathname: pathname.into(), search: search.into(), key: LocationKey::next() }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn key(&self) -> LocationKey {
        self.key
    }
}
