//! Application route paths, path builders, and the route-table matcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routers resolve `location.pathname` against ordered tables of
//! `RouteDefinition`s. Matching is segment-wise: `:name` segments capture a
//! single non-empty segment, exact entries require the same segment count, and
//! prefix entries accept any deeper path. There is no trailing-slash
//! normalization, so `/sign-in/` does not match an exact `/sign-in`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path patterns for every application route.
pub struct AppRoute;

impl AppRoute {
    pub const BASE: &'static str = "/";
    pub const HOME: &'static str = "/home";

    pub const ALERTS: &'static str = "/alerts";
    pub const ALERTS_ALL: &'static str = "/alerts/all";
    pub const ALERTS_VIEW: &'static str = "/alerts/view/id/:id";
    pub const ALERTS_CREATE: &'static str = "/alerts/create";
    pub const ALERTS_UPDATE: &'static str = "/alerts/update/id/:id";

    pub const ANOMALIES: &'static str = "/anomalies";
    pub const ANOMALIES_ALL: &'static str = "/anomalies/all";
    pub const ANOMALIES_VIEW: &'static str = "/anomalies/view/id/:id";

    pub const CONFIGURATION: &'static str = "/configuration";

    pub const SUBSCRIPTION_GROUPS: &'static str = "/configuration/subscription-groups";
    pub const SUBSCRIPTION_GROUPS_ALL: &'static str = "/configuration/subscription-groups/all";
    pub const SUBSCRIPTION_GROUPS_VIEW: &'static str = "/configuration/subscription-groups/view/id/:id";
    pub const SUBSCRIPTION_GROUPS_CREATE: &'static str = "/configuration/subscription-groups/create";
    pub const SUBSCRIPTION_GROUPS_UPDATE: &'static str = "/configuration/subscription-groups/update/id/:id";

    pub const DATASETS: &'static str = "/configuration/datasets";
    pub const DATASETS_ALL: &'static str = "/configuration/datasets/all";
    pub const DATASETS_VIEW: &'static str = "/configuration/datasets/view/id/:id";
    pub const DATASETS_ONBOARD: &'static str = "/configuration/datasets/onboard";

    pub const METRICS: &'static str = "/configuration/metrics";
    pub const METRICS_ALL: &'static str = "/configuration/metrics/all";
    pub const METRICS_VIEW: &'static str = "/configuration/metrics/view/id/:id";

    pub const SIGN_IN: &'static str = "/sign-in";
    pub const SIGN_OUT: &'static str = "/sign-out";
}

/// Query parameters carried across redirects (time-range context).
pub const RECOGNIZED_QUERY_PARAMS: [&str; 3] = ["timeRange", "startTime", "endTime"];

// =============================================================================
// MATCHING
// =============================================================================

/// Values captured by `:name` segments, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Match `pathname` against `pattern`.
///
/// Returns the captured params on success. With `exact == false` the pattern
/// only has to match a leading run of path segments.
pub fn match_path(pattern: &'static str, pathname: &str, exact: bool) -> Option<RouteParams> {
    let mut params = Vec::new();
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = pathname.split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(RouteParams(params)),
            (None, Some(_)) => return (!exact).then_some(RouteParams(params)),
            (Some(_), None) => return None,
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.push((name, actual.to_owned()));
                } else if expected != actual {
                    return None;
                }
            }
        }
    }
}

/// One static entry of a route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDefinition<T> {
    pub pattern: &'static str,
    pub exact: bool,
    pub target: T,
}

impl<T> RouteDefinition<T> {
    pub const fn exact(pattern: &'static str, target: T) -> Self {
        Self { pattern, exact: true, target }
    }

    pub const fn prefix(pattern: &'static str, target: T) -> Self {
        Self { pattern, exact: false, target }
    }
}

/// Successful table lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<T> {
    pub target: T,
    pub params: RouteParams,
}

/// Ordered route table; the first matching definition wins.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable<T: 'static> {
    routes: &'static [RouteDefinition<T>],
}

impl<T: Copy> RouteTable<T> {
    pub const fn new(routes: &'static [RouteDefinition<T>]) -> Self {
        Self { routes }
    }

    /// Resolve `pathname`, or `None` when the caller's catch-all applies.
    pub fn resolve(&self, pathname: &str) -> Option<RouteMatch<T>> {
        self.routes.iter().find_map(|route| {
            match_path(route.pattern, pathname, route.exact).map(|params| RouteMatch { target: route.target, params })
        })
    }
}

// =============================================================================
// PATH BUILDERS
// =============================================================================

fn with_id(pattern: &str, id: impl std::fmt::Display) -> String {
    pattern.replacen(":id", &id.to_string(), 1)
}

pub fn get_base_path() -> String {
    AppRoute::BASE.to_owned()
}

pub fn get_home_path() -> String {
    AppRoute::HOME.to_owned()
}

/// Sign-in path keeping the recognized part of the current `search`.
pub fn get_sign_in_path(search: &str) -> String {
    create_path_with_recognized_query_string(AppRoute::SIGN_IN, search)
}

pub fn get_sign_out_path() -> String {
    AppRoute::SIGN_OUT.to_owned()
}

pub fn get_alerts_all_path() -> String {
    AppRoute::ALERTS_ALL.to_owned()
}

pub fn get_alerts_view_path(id: impl std::fmt::Display) -> String {
    with_id(AppRoute::ALERTS_VIEW, id)
}

pub fn get_alerts_create_path() -> String {
    AppRoute::ALERTS_CREATE.to_owned()
}

pub fn get_alerts_update_path(id: impl std::fmt::Display) -> String {
    with_id(AppRoute::ALERTS_UPDATE, id)
}

pub fn get_anomalies_path() -> String {
    AppRoute::ANOMALIES.to_owned()
}

pub fn get_configuration_path() -> String {
    AppRoute::CONFIGURATION.to_owned()
}

pub fn get_subscription_groups_path() -> String {
    AppRoute::SUBSCRIPTION_GROUPS.to_owned()
}

pub fn get_subscription_groups_create_path() -> String {
    AppRoute::SUBSCRIPTION_GROUPS_CREATE.to_owned()
}

pub fn get_subscription_groups_view_path(id: impl std::fmt::Display) -> String {
    with_id(AppRoute::SUBSCRIPTION_GROUPS_VIEW, id)
}

pub fn get_datasets_path() -> String {
    AppRoute::DATASETS.to_owned()
}

pub fn get_datasets_onboard_path() -> String {
    AppRoute::DATASETS_ONBOARD.to_owned()
}

pub fn get_metrics_path() -> String {
    AppRoute::METRICS.to_owned()
}

/// Append the recognized query pairs of `search` to `path`.
///
/// `search` may carry a leading `?`. Unrecognized pairs are dropped and the
/// kept pairs preserve their original order and encoding.
pub fn create_path_with_recognized_query_string(path: &str, search: &str) -> String {
    let kept: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            RECOGNIZED_QUERY_PARAMS.contains(&key)
        })
        .collect();

    if kept.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", kept.join("&"))
    }
}
