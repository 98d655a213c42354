//! Sign-in page: access-token form for the unauthenticated surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the unauthenticated router with the destination the user was
//! heading to. After the server accepts the token the page only flips auth
//! state. That remounts the authenticated surface at the sign-in path, whose
//! route redirects to the stored destination and clears it.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::routes::get_base_path;

const MISSING_TOKEN_MESSAGE: &str = "Enter an access token first.";

fn validate_access_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() { Err(MISSING_TOKEN_MESSAGE) } else { Ok(token.to_owned()) }
}

/// Hint shown under the title when sign-in will continue somewhere specific.
fn destination_hint(redirection_url: &str) -> Option<String> {
    if redirection_url.is_empty() || redirection_url == get_base_path() {
        None
    } else {
        Some(format!("You will continue to {redirection_url}"))
    }
}

#[component]
pub fn SignInPage(#[prop(into)] redirection_url: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access_token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let hint = destination_hint(&redirection_url);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = match validate_access_token_input(&access_token.get()) {
            Ok(token) => token,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&token).await {
                    Ok(()) => {
                        log::info!("signed in");
                        auth.update(AuthState::sign_in);
                    }
                    Err(e) => {
                        info.set(format!("Sign in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, auth);
    };

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h1>"ThirdEye"</h1>
                <p class="sign-in-card__subtitle">"Sign in to continue"</p>
                {hint.map(|hint| view! { <p class="sign-in-card__destination">{hint}</p> })}
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        class="sign-in-input"
                        type="password"
                        placeholder="Access token"
                        autocomplete="current-password"
                        prop:value=move || access_token.get()
                        on:input=move |ev| access_token.set(event_target_value(&ev))
                    />
                    <button class="sign-in-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="sign-in-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
