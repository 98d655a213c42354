//! Sign-out page: ends the session, then lets the auth gate take over.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn SignOutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        if !auth.get_untracked().auth_disabled {
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                auth.update(AuthState::sign_out);
                log::info!("signed out");
            });
        }
    }

    view! {
        <div class="sign-out-page">
            <p>
                {move || {
                    if auth.get().auth_disabled {
                        "Authentication is disabled for this deployment."
                    } else {
                        "Signing out..."
                    }
                }}
            </p>
        </div>
    }
}
