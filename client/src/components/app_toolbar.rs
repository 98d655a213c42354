//! Section action bar rendered from `UiState::app_toolbar`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn SectionToolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().app_toolbar.is_some()>
            <div class="app-toolbar">
                {move || {
                    ui.get()
                        .app_toolbar
                        .map(|toolbar| toolbar.actions)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|action| view! { <a class="app-toolbar__button" href=action.path>{action.label}</a> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
