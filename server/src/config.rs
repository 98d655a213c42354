//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and then calls `ServerConfig::from_env`.
//! Parsing goes through a lookup function so tests can feed a map instead of
//! mutating the process environment.

use sha2::{Digest, Sha256};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("AUTH_ACCESS_TOKEN is required unless AUTH_DISABLED is set")]
    MissingAccessToken,
}

/// How `/api/auth/sign-in` is gated.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Every visitor is treated as signed in; sign-in is not offered.
    Disabled,
    /// Sign-in requires the configured access token. Only its digest is kept.
    AccessToken { digest: [u8; 32] },
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::AccessToken { .. } => f.write_str("AccessToken { .. }"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthMode,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_DISABLED`: default false
    /// - `COOKIE_SECURE`: default false
    ///
    /// Required unless auth is disabled:
    /// - `AUTH_ACCESS_TOKEN`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for malformed values or a missing access token.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let auth_disabled = lookup_bool(&lookup, "AUTH_DISABLED")?.unwrap_or(false);
        let cookie_secure = lookup_bool(&lookup, "COOKIE_SECURE")?.unwrap_or(false);

        let auth = if auth_disabled {
            AuthMode::Disabled
        } else {
            let token = lookup("AUTH_ACCESS_TOKEN").unwrap_or_default();
            let token = token.trim();
            if token.is_empty() {
                return Err(ConfigError::MissingAccessToken);
            }
            AuthMode::AccessToken { digest: Sha256::digest(token.as_bytes()).into() }
        };

        Ok(Self { port, auth, cookie_secure })
    }

    #[must_use]
    pub fn auth_disabled(&self) -> bool {
        self.auth == AuthMode::Disabled
    }

    /// Compare `candidate` against the configured token by digest.
    ///
    /// Always `false` when auth is disabled.
    #[must_use]
    pub fn access_token_matches(&self, candidate: &str) -> bool {
        match &self.auth {
            AuthMode::Disabled => false,
            AuthMode::AccessToken { digest } => {
                let candidate: [u8; 32] = Sha256::digest(candidate.trim().as_bytes()).into();
                candidate
                    .iter()
                    .zip(digest.iter())
                    .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                    == 0
            }
        }
    }
}

/// Parse the usual boolean spellings, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn lookup_bool(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<bool>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or(ConfigError::InvalidBool { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
