//! Shared wire DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! The server serializes these exact types, so field names stay in sync on
//! both sides of `/api/auth/*`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/auth/info`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub auth_disabled: bool,
    /// Whether the request carried a valid session cookie.
    pub authenticated: bool,
}

/// Body of `POST /api/auth/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub access_token: String,
}
