//! Header link to the sign-out page.

#[cfg(test)]
#[path = "sign_out_link_test.rs"]
mod sign_out_link_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::routes::get_sign_out_path;

/// Only a real session can be ended; auth-disabled deployments have none.
fn shows_sign_out(auth: &AuthState) -> bool {
    auth.authenticated && !auth.auth_disabled
}

#[component]
pub fn SignOutLink() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || shows_sign_out(&auth.get())>
            <a class="app-header__sign-out" href=get_sign_out_path()>"Sign out"</a>
        </Show>
    }
}
