use super::*;

#[test]
fn endpoints_live_under_api_auth() {
    assert_eq!(AUTH_INFO_ENDPOINT, "/api/auth/info");
    assert_eq!(SIGN_IN_ENDPOINT, "/api/auth/sign-in");
    assert_eq!(SIGN_OUT_ENDPOINT, "/api/auth/sign-out");
}

#[test]
fn sign_in_failed_message_explains_known_statuses() {
    assert_eq!(sign_in_failed_message(401), "access token rejected");
    assert_eq!(sign_in_failed_message(404), "sign-in is not enabled on this server");
    assert_eq!(sign_in_failed_message(500), "sign in failed: 500");
}
