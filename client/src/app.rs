//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_breadcrumbs::AppBreadcrumbs;
use crate::components::app_toolbar::SectionToolbar;
use crate::components::auth_provider::AuthProvider;
use crate::components::sign_out_link::SignOutLink;
use crate::routers::app_router::AppRouter;
use crate::state::AppStores;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every path is handed to `AppRouter`; the route-table decisions live in
/// `routers`, not in the Leptos route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::pending()));
    AppStores::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/thirdeye-ui.css"/>
        <Title text="ThirdEye"/>

        <Router>
            <AuthProvider>
                <header class="app-header">
                    <AppBreadcrumbs/>
                    <SectionToolbar/>
                    <SignOutLink/>
                </header>
                <main class="app-main">
                    <Routes fallback=|| view! { <AppRouter/> }>
                        <Route path=StaticSegment("") view=AppRouter/>
                        <Route path=WildcardSegment("any") view=AppRouter/>
                    </Routes>
                </main>
            </AuthProvider>
        </Router>
    }
}
