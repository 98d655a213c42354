//! Auth routes: auth info, access-token sign-in, sign-out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use thirdeye_ui::net::types::{AuthInfo, SignInRequest};
use time::Duration;

use crate::services::session::SESSION_TTL;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "thirdeye_session";

fn session_cookie(token: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn session_token(jar: &CookieJar) -> &str {
    jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/info` — auth configuration and whether the cookie is live.
pub async fn info(State(state): State<AppState>, jar: CookieJar) -> Json<AuthInfo> {
    let authenticated = state.sessions.validate(session_token(&jar)).await;
    Json(AuthInfo { auth_disabled: state.config.auth_disabled(), authenticated })
}

/// `POST /api/auth/sign-in` — exchange the access token for a session cookie.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInRequest>) -> Response {
    if state.config.auth_disabled() {
        return StatusCode::NOT_FOUND.into_response();
    }
    if !state.config.access_token_matches(&body.access_token) {
        tracing::warn!("sign-in rejected: access token mismatch");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let token = state.sessions.create().await;
    let active_sessions = state.sessions.count().await;
    tracing::info!(active_sessions, "session created");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure, SESSION_TTL));
    (jar, StatusCode::NO_CONTENT).into_response()
}

/// `POST /api/auth/sign-out` — revoke the session, clear the cookie.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = session_token(&jar).to_owned();
    if !token.is_empty() && state.sessions.revoke(&token).await {
        tracing::info!("session revoked");
    }

    let jar = jar.add(session_cookie(String::new(), state.config.cookie_secure, Duration::ZERO));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
