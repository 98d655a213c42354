use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};

use super::*;
use crate::state::test_helpers::{TEST_ACCESS_TOKEN, test_app_state, test_app_state_auth_disabled};

/// Jar as the extractor would build it from a request carrying `token`.
fn jar_with(token: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, format!("{COOKIE_NAME}={token}").parse().unwrap());
    CookieJar::from_headers(&headers)
}

fn sign_in_body(token: &str) -> Json<SignInRequest> {
    Json(SignInRequest { access_token: token.to_owned() })
}

fn set_cookie_header(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Pull the session token out of a `Set-Cookie` header value.
fn cookie_token(header: &str) -> String {
    let pair = header.split(';').next().unwrap_or_default();
    pair.split_once('=').map(|(_, v)| v.to_owned()).unwrap_or_default()
}

// =============================================================================
// info
// =============================================================================

#[tokio::test]
async fn info_without_cookie_is_unauthenticated() {
    let Json(info) = info(State(test_app_state()), CookieJar::new()).await;
    assert_eq!(info, AuthInfo { auth_disabled: false, authenticated: false });
}

#[tokio::test]
async fn info_reports_auth_disabled() {
    let Json(info) = info(State(test_app_state_auth_disabled()), CookieJar::new()).await;
    assert!(info.auth_disabled);
    assert!(!info.authenticated);
}

#[tokio::test]
async fn info_with_live_session_is_authenticated() {
    let state = test_app_state();
    let token = state.sessions.create().await;
    let Json(info) = info(State(state), jar_with(&token)).await;
    assert!(info.authenticated);
}

#[tokio::test]
async fn info_with_unknown_cookie_is_unauthenticated() {
    let Json(info) = info(State(test_app_state()), jar_with("deadbeef")).await;
    assert!(!info.authenticated);
}

// =============================================================================
// sign_in
// =============================================================================

#[tokio::test]
async fn sign_in_with_correct_token_sets_session_cookie() {
    let state = test_app_state();
    let response = sign_in(State(state.clone()), CookieJar::new(), sign_in_body(TEST_ACCESS_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let header = set_cookie_header(&response);
    assert!(header.starts_with(&format!("{COOKIE_NAME}=")));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(!header.contains("Secure"));

    let token = cookie_token(&header);
    assert_eq!(token.len(), 64);
    assert!(state.sessions.validate(&token).await);
}

#[tokio::test]
async fn sign_in_trims_submitted_token() {
    let response =
        sign_in(State(test_app_state()), CookieJar::new(), sign_in_body(&format!("  {TEST_ACCESS_TOKEN} "))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn sign_in_with_wrong_token_is_unauthorized() {
    let state = test_app_state();
    let response = sign_in(State(state.clone()), CookieJar::new(), sign_in_body("nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(state.sessions.count().await, 0);
}

#[tokio::test]
async fn sign_in_when_auth_disabled_is_not_found() {
    let response = sign_in(State(test_app_state_auth_disabled()), CookieJar::new(), sign_in_body("anything")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// sign_out
// =============================================================================

#[tokio::test]
async fn sign_out_revokes_session_and_clears_cookie() {
    let state = test_app_state();
    let token = state.sessions.create().await;

    let response = sign_out(State(state.clone()), jar_with(&token)).await.into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let header = set_cookie_header(&response);
    assert!(header.starts_with(&format!("{COOKIE_NAME}=;")));
    assert!(header.contains("Max-Age=0"));
    assert!(!state.sessions.validate(&token).await);
}

#[tokio::test]
async fn sign_out_without_session_still_succeeds() {
    let response = sign_out(State(test_app_state()), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
