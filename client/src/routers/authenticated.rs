//! Router for signed-in users (or auth-disabled deployments).
//!
//! SYSTEM CONTEXT
//! ==============
//! A prefix table picks the section (alerts, anomalies, the configuration
//! sub-sections, or the general pages). Each section owns an exact-match
//! table, its breadcrumbs and its toolbar. Paths a section does not know
//! render the page-not-found view.

#[cfg(test)]
#[path = "authenticated_test.rs"]
mod authenticated_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::page_not_found::PageNotFoundPage;
use crate::pages::section::SectionPage;
use crate::pages::sign_out::SignOutPage;
use crate::state::AppStores;
use crate::state::breadcrumbs::Breadcrumb;
use crate::state::redirection_path::RedirectionPathState;
use crate::state::ui::AppToolbar;
use crate::util::routes::{
    AppRoute, RouteDefinition, RouteParams, RouteTable, get_alerts_all_path, get_alerts_create_path,
    get_anomalies_path, get_configuration_path, get_datasets_onboard_path, get_datasets_path, get_metrics_path,
    get_subscription_groups_create_path, get_subscription_groups_path,
};

/// Section router selected by the leading path segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Alerts,
    Anomalies,
    Configuration,
    SubscriptionGroups,
    Datasets,
    Metrics,
    General,
}

/// Leaf pages of the authenticated surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    AlertsAll,
    AlertsView,
    AlertsCreate,
    AlertsUpdate,
    AnomaliesAll,
    AnomaliesView,
    Configuration,
    SubscriptionGroupsAll,
    SubscriptionGroupsView,
    SubscriptionGroupsCreate,
    SubscriptionGroupsUpdate,
    DatasetsAll,
    DatasetsView,
    DatasetsOnboard,
    MetricsAll,
    MetricsView,
    SignOut,
    PageNotFound,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AlertsAll => "Alerts",
            Self::AlertsView => "Alert",
            Self::AlertsCreate => "Create alert",
            Self::AlertsUpdate => "Update alert",
            Self::AnomaliesAll => "Anomalies",
            Self::AnomaliesView => "Anomaly",
            Self::Configuration => "Configuration",
            Self::SubscriptionGroupsAll => "Subscription groups",
            Self::SubscriptionGroupsView => "Subscription group",
            Self::SubscriptionGroupsCreate => "Create subscription group",
            Self::SubscriptionGroupsUpdate => "Update subscription group",
            Self::DatasetsAll => "Datasets",
            Self::DatasetsView => "Dataset",
            Self::DatasetsOnboard => "Onboard dataset",
            Self::MetricsAll => "Metrics",
            Self::MetricsView => "Metric",
            Self::SignOut => "Sign out",
            Self::PageNotFound => "Page not found",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Page(Page),
    Redirect(&'static str),
    /// Already signed in at the sign-in path: continue to the stored destination.
    RedirectToStored,
}

const SECTIONS: RouteTable<Section> = RouteTable::new(&[
    RouteDefinition::prefix(AppRoute::ALERTS, Section::Alerts),
    RouteDefinition::prefix(AppRoute::ANOMALIES, Section::Anomalies),
    RouteDefinition::prefix(AppRoute::SUBSCRIPTION_GROUPS, Section::SubscriptionGroups),
    RouteDefinition::prefix(AppRoute::DATASETS, Section::Datasets),
    RouteDefinition::prefix(AppRoute::METRICS, Section::Metrics),
    RouteDefinition::prefix(AppRoute::CONFIGURATION, Section::Configuration),
]);

const ALERTS_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::ALERTS, Target::Page(Page::AlertsAll)),
    RouteDefinition::exact(AppRoute::ALERTS_ALL, Target::Page(Page::AlertsAll)),
    RouteDefinition::exact(AppRoute::ALERTS_VIEW, Target::Page(Page::AlertsView)),
    RouteDefinition::exact(AppRoute::ALERTS_CREATE, Target::Page(Page::AlertsCreate)),
    RouteDefinition::exact(AppRoute::ALERTS_UPDATE, Target::Page(Page::AlertsUpdate)),
]);

const ANOMALIES_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::ANOMALIES, Target::Page(Page::AnomaliesAll)),
    RouteDefinition::exact(AppRoute::ANOMALIES_ALL, Target::Page(Page::AnomaliesAll)),
    RouteDefinition::exact(AppRoute::ANOMALIES_VIEW, Target::Page(Page::AnomaliesView)),
]);

const CONFIGURATION_ROUTES: RouteTable<Target> =
    RouteTable::new(&[RouteDefinition::exact(AppRoute::CONFIGURATION, Target::Page(Page::Configuration))]);

const SUBSCRIPTION_GROUPS_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::SUBSCRIPTION_GROUPS, Target::Page(Page::SubscriptionGroupsAll)),
    RouteDefinition::exact(AppRoute::SUBSCRIPTION_GROUPS_ALL, Target::Page(Page::SubscriptionGroupsAll)),
    RouteDefinition::exact(AppRoute::SUBSCRIPTION_GROUPS_VIEW, Target::Page(Page::SubscriptionGroupsView)),
    RouteDefinition::exact(AppRoute::SUBSCRIPTION_GROUPS_CREATE, Target::Page(Page::SubscriptionGroupsCreate)),
    RouteDefinition::exact(AppRoute::SUBSCRIPTION_GROUPS_UPDATE, Target::Page(Page::SubscriptionGroupsUpdate)),
]);

const DATASETS_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::DATASETS, Target::Page(Page::DatasetsAll)),
    RouteDefinition::exact(AppRoute::DATASETS_ALL, Target::Page(Page::DatasetsAll)),
    RouteDefinition::exact(AppRoute::DATASETS_VIEW, Target::Page(Page::DatasetsView)),
    RouteDefinition::exact(AppRoute::DATASETS_ONBOARD, Target::Page(Page::DatasetsOnboard)),
]);

const METRICS_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::METRICS, Target::Page(Page::MetricsAll)),
    RouteDefinition::exact(AppRoute::METRICS_ALL, Target::Page(Page::MetricsAll)),
    RouteDefinition::exact(AppRoute::METRICS_VIEW, Target::Page(Page::MetricsView)),
]);

const GENERAL_ROUTES: RouteTable<Target> = RouteTable::new(&[
    RouteDefinition::exact(AppRoute::BASE, Target::Redirect(AppRoute::HOME)),
    RouteDefinition::exact(AppRoute::HOME, Target::Page(Page::Home)),
    RouteDefinition::exact(AppRoute::SIGN_IN, Target::RedirectToStored),
    RouteDefinition::exact(AppRoute::SIGN_OUT, Target::Page(Page::SignOut)),
]);

impl Section {
    /// Pick the section router for `pathname`; unmatched paths go to `General`.
    pub fn of(pathname: &str) -> Self {
        SECTIONS.resolve(pathname).map_or(Self::General, |hit| hit.target)
    }

    fn routes(self) -> RouteTable<Target> {
        match self {
            Self::Alerts => ALERTS_ROUTES,
            Self::Anomalies => ANOMALIES_ROUTES,
            Self::Configuration => CONFIGURATION_ROUTES,
            Self::SubscriptionGroups => SUBSCRIPTION_GROUPS_ROUTES,
            Self::Datasets => DATASETS_ROUTES,
            Self::Metrics => METRICS_ROUTES,
            Self::General => GENERAL_ROUTES,
        }
    }

    /// Router breadcrumbs set when the section is entered.
    pub fn breadcrumbs(self) -> Vec<Breadcrumb> {
        let configuration = || Breadcrumb::new("Configuration", Some(get_configuration_path()));
        match self {
            Self::Alerts => vec![Breadcrumb::new("Alerts", Some(get_alerts_all_path()))],
            Self::Anomalies => vec![Breadcrumb::new("Anomalies", Some(get_anomalies_path()))],
            Self::Configuration => vec![configuration()],
            Self::SubscriptionGroups => vec![
                configuration(),
                Breadcrumb::new("Subscription groups", Some(get_subscription_groups_path())),
            ],
            Self::Datasets => vec![configuration(), Breadcrumb::new("Datasets", Some(get_datasets_path()))],
            Self::Metrics => vec![configuration(), Breadcrumb::new("Metrics", Some(get_metrics_path()))],
            Self::General => Vec::new(),
        }
    }

    pub fn toolbar(self) -> Option<AppToolbar> {
        match self {
            Self::Alerts => Some(AppToolbar::default().with_action("Create alert", get_alerts_create_path())),
            Self::SubscriptionGroups => Some(
                AppToolbar::default().with_action("Create subscription group", get_subscription_groups_create_path()),
            ),
            Self::Datasets => Some(AppToolbar::default().with_action("Onboard dataset", get_datasets_onboard_path())),
            Self::Anomalies | Self::Configuration | Self::Metrics | Self::General => None,
        }
    }
}

/// What the authenticated surface shows for a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthenticatedView {
    Page { page: Page, params: RouteParams },
    Redirect { to: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub section: Section,
    pub view: AuthenticatedView,
    /// The view redirects to the stored sign-in destination, which must be
    /// cleared once the redirect is issued.
    pub consumes_redirection: bool,
}

impl Resolved {
    /// Clear the stored destination if this view used it. Returns whether a
    /// path was cleared.
    pub fn settle(&self, redirection: &mut RedirectionPathState) -> bool {
        self.consumes_redirection && redirection.take().is_some()
    }
}

/// Resolve `pathname` through the section table and then the section's own routes.
pub fn resolve_authenticated(pathname: &str, redirection: &RedirectionPathState) -> Resolved {
    let section = Section::of(pathname);
    let mut consumes_redirection = false;
    let view = match section.routes().resolve(pathname) {
        Some(hit) => match hit.target {
            Target::Page(page) => AuthenticatedView::Page { page, params: hit.params },
            Target::Redirect(to) => AuthenticatedView::Redirect { to: to.to_owned() },
            Target::RedirectToStored => {
                consumes_redirection = true;
                AuthenticatedView::Redirect { to: redirection.target() }
            }
        },
        None => AuthenticatedView::Page { page: Page::PageNotFound, params: RouteParams::default() },
    };
    Resolved { section, view, consumes_redirection }
}

#[component]
pub fn AuthenticatedRouter() -> impl IntoView {
    let stores = AppStores::expect();
    let router_location = use_location();

    let resolved = Memo::new(move |_| {
        let pathname = router_location.pathname.get();
        stores.redirection.with_untracked(|redirection| resolve_authenticated(&pathname, redirection))
    });
    let section = Memo::new(move |_| resolved.get().section);

    // Entering a section resets the app-section crumb and installs the section's chrome.
    Effect::new(move || {
        let section = section.get();
        stores.breadcrumbs.update(|state| state.set_app_section_breadcrumb(Breadcrumb::default()));
        stores.set_section_chrome(section.breadcrumbs(), section.toolbar());
    });

    // The sign-in redirect is the single reader of the stored destination.
    Effect::new(move || {
        let current = resolved.get();
        if current.consumes_redirection {
            stores.redirection.update(|redirection| {
                current.settle(redirection);
            });
        }
    });

    move || match resolved.get().view {
        AuthenticatedView::Page { page: Page::PageNotFound, .. } => view! { <PageNotFoundPage/> }.into_any(),
        AuthenticatedView::Page { page: Page::SignOut, .. } => view! { <SignOutPage/> }.into_any(),
        AuthenticatedView::Page { page, params } => view! { <SectionPage page=page params=params/> }.into_any(),
        AuthenticatedView::Redirect { to } => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=to options=options/> }.into_any()
        }
    }
}
