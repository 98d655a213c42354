//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and the session store; both are cheap to
//! clone.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), sessions: SessionStore::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::AuthMode;

    pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

    /// State for a deployment that requires `TEST_ACCESS_TOKEN`.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig {
            port: 0,
            auth: AuthMode::AccessToken { digest: crate::services::session::token_digest(TEST_ACCESS_TOKEN) },
            cookie_secure: false,
        })
    }

    /// State for a deployment with auth turned off.
    #[must_use]
    pub fn test_app_state_auth_disabled() -> AppState {
        AppState::new(ServerConfig { port: 0, auth: AuthMode::Disabled, cookie_secure: false })
    }
}
