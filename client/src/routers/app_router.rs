//! Top-level auth gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted for every path. Chooses between the authenticated surface and the
//! unauthenticated (sign-in) surface, and swaps them as soon as auth state
//! changes, without waiting for a navigation.

#[cfg(test)]
#[path = "app_router_test.rs"]
mod app_router_test;

use leptos::prelude::*;

use super::authenticated::AuthenticatedRouter;
use super::unauthenticated::GeneralUnauthenticatedRouter;
use crate::state::auth::AuthState;

/// Which router tree is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Authenticated,
    Unauthenticated,
}

/// Auth-disabled deployments always get the authenticated surface.
pub fn select_surface(auth: &AuthState) -> Surface {
    if auth.auth_disabled || auth.authenticated { Surface::Authenticated } else { Surface::Unauthenticated }
}

#[component]
pub fn AppRouter() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Memoized so auth writes that keep the same surface do not remount it.
    let surface = Memo::new(move |_| select_surface(&auth.get()));

    move || match surface.get() {
        Surface::Authenticated => view! { <AuthenticatedRouter/> }.into_any(),
        Surface::Unauthenticated => view! { <GeneralUnauthenticatedRouter/> }.into_any(),
    }
}
