use super::*;

#[test]
fn alert_view_links_to_its_edit_page() {
    assert_eq!(related_link(Page::AlertsView, "7"), Some(("Edit alert", "/alerts/update/id/7".to_owned())));
}

#[test]
fn alert_update_links_back_to_view() {
    assert_eq!(related_link(Page::AlertsUpdate, "a1"), Some(("View alert", "/alerts/view/id/a1".to_owned())));
}

#[test]
fn subscription_group_update_links_back_to_view() {
    assert_eq!(
        related_link(Page::SubscriptionGroupsUpdate, "9"),
        Some(("View subscription group", "/configuration/subscription-groups/view/id/9".to_owned()))
    );
}

#[test]
fn listing_pages_have_no_related_link() {
    assert_eq!(related_link(Page::AlertsAll, "1"), None);
    assert_eq!(related_link(Page::MetricsView, "1"), None);
}
