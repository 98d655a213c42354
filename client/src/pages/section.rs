//! Section page frame for alerts, anomalies and configuration screens.
//!
//! The screens' bodies (alert wizard, anomaly charts, dataset and metric
//! editors) mount inside this frame; routing only supplies the page and its
//! captured params.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;

use crate::routers::authenticated::Page;
use crate::util::routes::{
    RouteParams, get_alerts_update_path, get_alerts_view_path, get_subscription_groups_view_path,
};

/// Link between the view and edit screens of one entity.
fn related_link(page: Page, id: &str) -> Option<(&'static str, String)> {
    match page {
        Page::AlertsView => Some(("Edit alert", get_alerts_update_path(id))),
        Page::AlertsUpdate => Some(("View alert", get_alerts_view_path(id))),
        Page::SubscriptionGroupsUpdate => Some(("View subscription group", get_subscription_groups_view_path(id))),
        _ => None,
    }
}

#[component]
pub fn SectionPage(page: Page, params: RouteParams) -> impl IntoView {
    let id = params.get("id").map(str::to_owned);
    let related = id.as_deref().and_then(|id| related_link(page, id));

    view! {
        <section class="section-page" data-page=format!("{page:?}")>
            <h1 class="section-page__title">{page.title()}</h1>
            {id.map(|id| view! { <p class="section-page__id">"ID: " {id}</p> })}
            {related.map(|(label, path)| view! { <a class="section-page__related" href=path>{label}</a> })}
        </section>
    }
}
