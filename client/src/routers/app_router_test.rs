use super::*;

fn auth(auth_disabled: bool, authenticated: bool) -> AuthState {
    AuthState { auth_disabled, authenticated, loading: false }
}

#[test]
fn auth_disabled_always_selects_authenticated_surface() {
    assert_eq!(select_surface(&auth(true, false)), Surface::Authenticated);
    assert_eq!(select_surface(&auth(true, true)), Surface::Authenticated);
}

#[test]
fn signed_out_selects_unauthenticated_surface() {
    assert_eq!(select_surface(&auth(false, false)), Surface::Unauthenticated);
}

#[test]
fn signed_in_selects_authenticated_surface() {
    assert_eq!(select_surface(&auth(false, true)), Surface::Authenticated);
}

#[test]
fn completing_sign_in_switches_surface_without_navigation() {
    let mut state = auth(false, false);
    assert_eq!(select_surface(&state), Surface::Unauthenticated);
    state.sign_in();
    assert_eq!(select_surface(&state), Surface::Authenticated);
}

#[test]
fn loading_flag_does_not_affect_gate() {
    let state = AuthState { auth_disabled: false, authenticated: true, loading: true };
    assert_eq!(select_surface(&state), Surface::Authenticated);
}
