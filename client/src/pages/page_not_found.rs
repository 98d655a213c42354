//! Fallback view for unmatched authenticated paths.

use leptos::prelude::*;

use crate::util::routes::get_home_path;

#[component]
pub fn PageNotFoundPage() -> impl IntoView {
    view! {
        <div class="page-not-found">
            <h1>"Page not found"</h1>
            <a href=get_home_path()>"Back to home"</a>
        </div>
    }
}
