//! Breadcrumb trail rendered from `BreadcrumbState`.

use leptos::prelude::*;

use crate::state::breadcrumbs::BreadcrumbState;

#[component]
pub fn AppBreadcrumbs() -> impl IntoView {
    let breadcrumbs = expect_context::<RwSignal<BreadcrumbState>>();

    view! {
        <nav class="app-breadcrumbs" aria-label="Breadcrumb">
            {move || {
                breadcrumbs
                    .get()
                    .trail()
                    .into_iter()
                    .map(|crumb| match crumb.path {
                        Some(path) => view! { <a class="app-breadcrumbs__link" href=path>{crumb.text}</a> }.into_any(),
                        None => view! { <span class="app-breadcrumbs__text">{crumb.text}</span> }.into_any(),
                    })
                    .collect_view()
            }}
        </nav>
    }
}
