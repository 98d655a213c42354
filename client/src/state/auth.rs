//! Auth state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the app router to pick the authenticated or unauthenticated
//! surface. Written by the auth provider once auth info is known and by the
//! sign-in/sign-out pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthInfo;

/// Authentication flags plus the provider's loading status.
///
/// When `auth_disabled` is set the deployment skips authentication and
/// `authenticated` is ignored by routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub auth_disabled: bool,
    pub authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// State before the auth provider has heard from the server.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Apply fetched auth info. A failed fetch (`None`) leaves authentication
    /// enabled and the user signed out.
    pub fn apply_info(&mut self, info: Option<&AuthInfo>) {
        let info = info.copied().unwrap_or_default();
        self.auth_disabled = info.auth_disabled;
        self.authenticated = info.authenticated;
        self.loading = false;
    }

    pub fn sign_in(&mut self) {
        self.authenticated = true;
    }

    pub fn sign_out(&mut self) {
        self.authenticated = false;
    }
}
