use super::*;

#[test]
fn default_trail_is_empty() {
    assert!(BreadcrumbState::default().trail().is_empty());
}

#[test]
fn empty_section_marker_is_hidden_from_trail() {
    let mut state = BreadcrumbState::default();
    state.set_app_section_breadcrumb(Breadcrumb::default());
    assert_eq!(state.app_section, Some(Breadcrumb::default()));
    assert!(state.trail().is_empty());
}

#[test]
fn trail_lists_section_then_router_crumbs() {
    let mut state = BreadcrumbState::default();
    state.set_app_section_breadcrumb(Breadcrumb::new("Configuration", Some("/configuration".to_owned())));
    state.set_router_breadcrumbs(vec![Breadcrumb::new("Metrics", None)]);
    let texts: Vec<String> = state.trail().into_iter().map(|crumb| crumb.text).collect();
    assert_eq!(texts, vec!["Configuration", "Metrics"]);
}

#[test]
fn set_router_breadcrumbs_replaces_previous_crumbs() {
    let mut state = BreadcrumbState::default();
    state.set_router_breadcrumbs(vec![Breadcrumb::new("Alerts", None)]);
    state.set_router_breadcrumbs(Vec::new());
    assert!(state.router.is_empty());
}
