use super::*;

#[test]
fn ui_state_default_has_no_toolbar() {
    assert!(UiState::default().app_toolbar.is_none());
}

#[test]
fn toolbar_builder_keeps_action_order() {
    let toolbar = AppToolbar::default()
        .with_action("Create alert", "/alerts/create")
        .with_action("All alerts", "/alerts/all");
    let labels: Vec<&str> = toolbar.actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Create alert", "All alerts"]);
}

#[test]
fn remove_app_toolbar_clears_toolbar() {
    let mut ui = UiState::default();
    ui.set_app_toolbar(Some(AppToolbar::default().with_action("Onboard dataset", "/configuration/datasets/onboard")));
    assert!(ui.app_toolbar.is_some());
    ui.remove_app_toolbar();
    assert!(ui.app_toolbar.is_none());
}
