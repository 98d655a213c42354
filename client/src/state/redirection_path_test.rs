use super::*;

#[test]
fn default_store_is_empty_and_targets_base() {
    let store = RedirectionPathState::default();
    assert_eq!(store.get(), "");
    assert_eq!(store.target(), "/");
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = RedirectionPathState::default();
    store.set("/alerts");
    store.set("/reports/42");
    assert_eq!(store.get(), "/reports/42");
    assert_eq!(store.target(), "/reports/42");
}

#[test]
fn take_consumes_the_value() {
    let mut store = RedirectionPathState::default();
    store.set("/anomalies/all");
    assert_eq!(store.take().as_deref(), Some("/anomalies/all"));
    assert_eq!(store.take(), None);
    assert_eq!(store.target(), "/");
}

#[test]
fn empty_recorded_path_targets_base() {
    let mut store = RedirectionPathState::default();
    store.set("");
    assert_eq!(store.target(), "/");
}

#[test]
fn resolve_target_keeps_non_empty_paths() {
    assert_eq!(resolve_target("/home"), "/home");
    assert_eq!(resolve_target(""), "/");
}
