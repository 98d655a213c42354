//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade to the signed-out surface without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AuthInfo;

#[cfg(any(test, feature = "hydrate"))]
const AUTH_INFO_ENDPOINT: &str = "/api/auth/info";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    match status {
        401 => "access token rejected".to_owned(),
        404 => "sign-in is not enabled on this server".to_owned(),
        other => format!("sign in failed: {other}"),
    }
}

/// Fetch auth configuration and session status from `/api/auth/info`.
/// Returns `None` on the server or when the request fails.
pub async fn fetch_auth_info() -> Option<AuthInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(AUTH_INFO_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            log::warn!("auth info request failed: {}", resp.status());
            return None;
        }
        resp.json::<AuthInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Exchange an access token for a session cookie via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn sign_in(access_token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::SignInRequest { access_token: access_token.to_owned() };
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/sign-out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT).send().await {
            log::warn!("sign out request failed: {e}");
        }
    }
}
