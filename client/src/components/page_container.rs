//! Outer page frame shared by every route view.

use leptos::prelude::*;

#[component]
pub fn PageContainer(children: Children) -> impl IntoView {
    view! { <div class="page-container">{children()}</div> }
}
