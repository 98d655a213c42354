use super::*;

fn auth(auth_disabled: bool, authenticated: bool) -> AuthState {
    AuthState { auth_disabled, authenticated, loading: false }
}

#[test]
fn signed_in_user_sees_sign_out() {
    assert!(shows_sign_out(&auth(false, true)));
}

#[test]
fn signed_out_user_does_not() {
    assert!(!shows_sign_out(&auth(false, false)));
}

#[test]
fn auth_disabled_hides_sign_out() {
    assert!(!shows_sign_out(&auth(true, true)));
    assert!(!shows_sign_out(&auth(true, false)));
}
