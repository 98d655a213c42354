//! Router for signed-out users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the sign-in page is reachable here. Any other path is remembered as
//! the post-sign-in destination and redirected to sign-in.
//!
//! DESIGN
//! ======
//! Each `Location` goes through two phases. `Loading` renders a placeholder
//! while the entry action commits (breadcrumbs, toolbar, redirection path).
//! `Ready` matches the route table. The entry action is keyed by location so
//! it runs once per navigation, and a newer location always starts over at
//! `Loading`.
//!
//! The sign-in page always receives the stored redirection path (or the base
//! path when nothing was recorded). Recording already excludes the sign-in and
//! sign-out paths, so no second exclusion check is needed when rendering.

#[cfg(test)]
#[path = "unauthenticated_test.rs"]
mod unauthenticated_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::{Location, LocationKey};
use crate::components::loading_indicator::PageLoadingIndicator;
use crate::components::page_container::PageContainer;
use crate::pages::sign_in::SignInPage;
use crate::state::AppStores;
use crate::state::breadcrumbs::Breadcrumb;
use crate::state::redirection_path::RedirectionPathState;
use crate::util::routes::{AppRoute, RouteDefinition, RouteTable, get_sign_in_path};

/// Stores touched when a location enters the unauthenticated surface.
pub trait EntryStores {
    fn set_app_section_breadcrumb(&mut self, breadcrumb: Breadcrumb);
    fn set_router_breadcrumbs(&mut self, breadcrumbs: Vec<Breadcrumb>);
    fn remove_app_toolbar(&mut self);
    fn set_redirection_path(&mut self, path: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UnauthenticatedRoute {
    SignIn,
}

const UNAUTHENTICATED_ROUTES: RouteTable<UnauthenticatedRoute> =
    RouteTable::new(&[RouteDefinition::exact(AppRoute::SIGN_IN, UnauthenticatedRoute::SignIn)]);

/// What the unauthenticated surface shows for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnauthenticatedView {
    Loading,
    SignIn { redirection_url: String },
    Redirect { to: String },
}

/// Whether `pathname` is worth returning to after sign-in.
pub fn should_record_redirection(pathname: &str) -> bool {
    pathname != AppRoute::SIGN_IN && pathname != AppRoute::SIGN_OUT
}

/// Per-surface phase tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnauthenticatedRedirector {
    committed: Option<LocationKey>,
}

impl UnauthenticatedRedirector {
    pub fn phase(&self, location: &Location) -> Phase {
        if self.committed == Some(location.key()) { Phase::Ready } else { Phase::Loading }
    }

    /// Run the entry action for `location`.
    ///
    /// Returns `false` without touching `stores` when the action already ran
    /// for this location.
    pub fn commit(&mut self, location: &Location, stores: &mut impl EntryStores) -> bool {
        if self.phase(location) == Phase::Ready {
            return false;
        }

        stores.set_app_section_breadcrumb(Breadcrumb::default());
        stores.set_router_breadcrumbs(Vec::new());
        stores.remove_app_toolbar();
        if should_record_redirection(location.pathname()) {
            stores.set_redirection_path(location.pathname());
        }

        self.committed = Some(location.key());
        true
    }

    pub fn render(&self, location: &Location, redirection: &RedirectionPathState) -> UnauthenticatedView {
        if self.phase(location) == Phase::Loading {
            return UnauthenticatedView::Loading;
        }

        match UNAUTHENTICATED_ROUTES.resolve(location.pathname()) {
            Some(hit) => match hit.target {
                UnauthenticatedRoute::SignIn => UnauthenticatedView::SignIn { redirection_url: redirection.target() },
            },
            None => UnauthenticatedView::Redirect { to: get_sign_in_path(location.search()) },
        }
    }
}

#[component]
pub fn GeneralUnauthenticatedRouter() -> impl IntoView {
    let stores = AppStores::expect();
    let router_location = use_location();
    let redirector = RwSignal::new(UnauthenticatedRedirector::default());

    let location = Memo::new(move |_| Location::new(router_location.pathname.get(), router_location.search.get()));

    Effect::new(move || {
        let current = location.get();
        let mut sinks = stores;
        let committed = redirector.try_update(|r| r.commit(&current, &mut sinks)).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if committed {
                log::debug!("unauthenticated entry committed for {}", current.pathname());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = committed;
    });

    move || {
        let current = location.get();
        let decision = redirector.with(|r| stores.redirection.with_untracked(|p| r.render(&current, p)));
        match decision {
            UnauthenticatedView::Loading => view! {
                <PageContainer>
                    <PageLoadingIndicator/>
                </PageContainer>
            }
            .into_any(),
            UnauthenticatedView::SignIn { redirection_url } => {
                view! { <SignInPage redirection_url=redirection_url/> }.into_any()
            }
            UnauthenticatedView::Redirect { to } => {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=to options=options/> }.into_any()
            }
        }
    }
}
