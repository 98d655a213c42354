//! Post-sign-in destination store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the unauthenticated router when a signed-out user requests a
//! protected path; read by the sign-in page to send the user onward once
//! credentials are accepted. One instance lives for the whole app session.

#[cfg(test)]
#[path = "redirection_path_test.rs"]
mod redirection_path_test;

use crate::util::routes::get_base_path;

/// The path a signed-out user was trying to reach.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectionPathState {
    path: Option<String>,
}

impl RedirectionPathState {
    /// Stored path, or `""` when nothing has been recorded.
    pub fn get(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// Overwrite the stored path.
    pub fn set(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    /// Remove and return the stored path.
    pub fn take(&mut self) -> Option<String> {
        self.path.take()
    }

    /// Where the sign-in page should send the user: the stored path, or the
    /// base path when nothing meaningful was recorded.
    pub fn target(&self) -> String {
        resolve_target(self.get())
    }
}

/// Map an empty destination to the base path.
pub fn resolve_target(path: &str) -> String {
    if path.is_empty() { get_base_path() } else { path.to_owned() }
}
