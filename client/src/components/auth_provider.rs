//! Auth provider: resolves auth info once, then mounts its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing must not run before the auth flags are known, otherwise a signed-in
//! user would be bounced through sign-in on every page load. Until the server
//! answers (and during SSR) the loading placeholder is shown.

use leptos::prelude::*;

use super::loading_indicator::PageLoadingIndicator;
use super::page_container::PageContainer;
use crate::state::auth::AuthState;

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let info = crate::net::api::fetch_auth_info().await;
            if info.is_none() {
                log::warn!("auth info unavailable; continuing signed out");
            }
            auth.update(|state| state.apply_info(info.as_ref()));
        });
    }

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! {
                <PageContainer>
                    <PageLoadingIndicator/>
                </PageContainer>
            }
        >
            {children()}
        </Show>
    }
}
