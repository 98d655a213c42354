//! Neutral placeholder rendered while a router commits its entry action or
//! while auth info is still loading.

use leptos::prelude::*;

#[component]
pub fn PageLoadingIndicator() -> impl IntoView {
    view! {
        <div class="page-loading-indicator" role="status" aria-live="polite">
            <span class="page-loading-indicator__spinner" aria-hidden="true"></span>
            <span class="page-loading-indicator__label">"Loading..."</span>
        </div>
    }
}
